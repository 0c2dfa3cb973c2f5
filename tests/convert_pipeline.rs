#[cfg(feature = "svg")]
mod pipeline {
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    use appico::{ConvertOutcome, ICON_SIZES, IconError, IconJob, convert};

    const CIRCLE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64">
  <circle cx="32" cy="32" r="28" fill="#3366ff"/>
</svg>"##;

    fn scratch(name: &str) -> PathBuf {
        let dir = PathBuf::from("target").join("convert_pipeline").join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn job_with_svg(name: &str, svg: &str) -> IconJob {
        let dir = scratch(name);
        let input = dir.join("icon.svg");
        fs::write(&input, svg).unwrap();
        IconJob::new(input, dir.join("app.ico"))
    }

    fn read_entries(path: &std::path::Path) -> ico::IconDir {
        let bytes = fs::read(path).unwrap();
        ico::IconDir::read(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn writes_six_ascending_square_frames() {
        let job = job_with_svg("six_frames", CIRCLE);
        let outcome = convert(&job).unwrap();
        assert_eq!(
            outcome,
            ConvertOutcome::Created {
                output: job.output.clone(),
                sizes: ICON_SIZES.to_vec(),
            }
        );

        let dir = read_entries(&job.output);
        let dims: Vec<(u32, u32)> = dir.entries().iter().map(|e| (e.width(), e.height())).collect();
        assert_eq!(
            dims,
            [(16, 16), (32, 32), (48, 48), (64, 64), (128, 128), (256, 256)]
        );
        assert!(dir.entries().iter().all(|e| e.is_png()));
    }

    #[test]
    fn largest_frame_has_the_shape_in_the_middle() {
        let job = job_with_svg("pixels", CIRCLE);
        convert(&job).unwrap();

        let dir = read_entries(&job.output);
        let big = dir.entries().last().unwrap().decode().unwrap();
        assert_eq!(big.width(), 256);
        let rgba = big.rgba_data();
        let at = |x: usize, y: usize| {
            let i = (y * 256 + x) * 4;
            [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
        };
        assert_eq!(at(128, 128), [0x33, 0x66, 0xff, 0xff]);
        assert_eq!(at(0, 0)[3], 0);
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = scratch("missing");
        let job = IconJob::new(dir.join("nope.svg"), dir.join("app.ico"));
        let outcome = convert(&job).unwrap();
        assert_eq!(
            outcome,
            ConvertOutcome::InputMissing {
                input: job.input.clone()
            }
        );
        assert!(!job.output.exists());
    }

    #[test]
    fn second_run_overwrites_with_identical_bytes() {
        let job = job_with_svg("rerun", CIRCLE);
        fs::write(&job.output, b"stale").unwrap();

        convert(&job).unwrap();
        let first = fs::read(&job.output).unwrap();
        assert_ne!(first, b"stale");

        convert(&job).unwrap();
        let second = fs::read(&job.output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn trivial_one_pixel_svg_still_yields_all_sizes() {
        let tiny = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"><rect width="1" height="1" fill="#000"/></svg>"##;
        let job = job_with_svg("tiny", tiny);
        convert(&job).unwrap();

        let dir = read_entries(&job.output);
        let sizes: Vec<u32> = dir.entries().iter().map(|e| e.width()).collect();
        assert_eq!(sizes, ICON_SIZES);
    }

    #[test]
    fn malformed_svg_is_an_error_and_leaves_no_output() {
        let job = job_with_svg("malformed", "<svg this is not xml");
        let err = convert(&job).unwrap_err();
        assert!(matches!(err, IconError::Svg(_)));
        assert!(!job.output.exists());
    }

    #[test]
    fn directory_as_input_propagates_io_error() {
        let dir = scratch("dir_input");
        let input = dir.join("icon.svg");
        fs::create_dir_all(&input).unwrap();
        let job = IconJob::new(input, dir.join("app.ico"));

        let err = convert(&job).unwrap_err();
        assert!(matches!(err, IconError::Other(_)));
        assert!(err.to_string().contains("read svg"));
    }
}
