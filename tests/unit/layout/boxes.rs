use super::*;

fn hd() -> Canvas {
    Canvas::new(1920, 1080).unwrap()
}

#[test]
fn supported_counts_yield_that_many_boxes() {
    for count in SPLIT_COUNTS {
        assert_eq!(split_boxes(count, hd()).unwrap().len(), count);
    }
}

#[test]
fn two_way_split_is_left_and_right_halves() {
    let b = split_boxes(2, hd()).unwrap();
    assert_eq!(
        b,
        vec![
            BoxProps {
                x: -960.0,
                y: 540.0,
                size: 960.0
            },
            BoxProps {
                x: 0.0,
                y: 540.0,
                size: 960.0
            },
        ]
    );
}

#[test]
fn three_way_split_centers_the_top_box() {
    let b = split_boxes(3, hd()).unwrap();
    assert_eq!(b[0].x, -480.0);
    assert_eq!(b[0].y, 540.0);
    assert_eq!((b[1].x, b[1].y), (-960.0, 0.0));
    assert_eq!((b[2].x, b[2].y), (0.0, 0.0));
}

#[test]
fn four_way_split_is_a_grid() {
    let b = split_boxes(4, hd()).unwrap();
    let xy: Vec<(f64, f64)> = b.iter().map(|b| (b.x, b.y)).collect();
    assert_eq!(
        xy,
        vec![(-960.0, 540.0), (0.0, 540.0), (-960.0, 0.0), (0.0, 0.0)]
    );
    assert!(b.iter().all(|b| b.size == 960.0));
}

#[test]
fn unsupported_counts_are_errors() {
    for count in [0, 1, 5, 9] {
        let err = split_boxes(count, hd()).unwrap_err();
        assert!(matches!(err, SegmixError::UnsupportedSplitCount(c) if c == count));
    }
}

#[test]
fn geometry_depends_only_on_frame_size() {
    let small = Canvas::new(1280, 720).unwrap();
    assert_eq!(split_boxes(4, small).unwrap(), split_boxes(4, small).unwrap());
    assert_eq!(split_boxes(2, small).unwrap()[0].x, -640.0);
}

#[test]
fn pip_has_full_frame_and_fifth_scale_inset() {
    let [bg, inset] = pip_boxes(hd());
    assert_eq!(
        bg,
        BoxProps {
            x: 1920.0,
            y: 1080.0,
            size: 1920.0
        }
    );
    assert_eq!(
        inset,
        BoxProps {
            x: 384.0,
            y: 216.0,
            size: 384.0
        }
    );
}
