use binstruct::{BindError, Layout};

fn u16_u8_u32_u16() -> Layout {
    Layout::builder()
        .u16("foo")
        .u8("bar")
        .u32("baz")
        .u16("qux")
        .finalize()
        .unwrap()
}

#[test]
fn test_struct_u8() {
    let layout = Layout::builder().u8("foo").finalize().unwrap();
    assert_eq!(layout.size(), 1);
    assert_eq!(layout.offset("foo"), Ok(0));

    let mut bytes = [1u8];
    let view = layout.create(&mut bytes[..]).unwrap();
    assert_eq!(view.get("foo"), Ok(1));
}

#[test]
fn test_struct_u8_u8() {
    let layout = Layout::builder().u8("foo").u8("bar").finalize().unwrap();
    assert_eq!(layout.size(), 2);
    assert_eq!(layout.offset("foo"), Ok(0));
    assert_eq!(layout.offset("bar"), Ok(1));
}

#[test]
fn test_struct_u16_u8() {
    let layout = Layout::builder().u16("foo").u8("bar").finalize().unwrap();
    assert_eq!(layout.size(), 3);
    assert_eq!(layout.offset("foo"), Ok(0));
    assert_eq!(layout.offset("bar"), Ok(2));

    let mut bytes = [1u8, 2, 3];
    let mut view = layout.create(&mut bytes[..]).unwrap();
    assert_eq!(view.get("foo"), Ok(513));
    assert_eq!(view.get("bar"), Ok(3));

    view.set("bar", 4).unwrap();
    assert_eq!(bytes, [1, 2, 4]);
}

#[test]
fn test_struct_u16_u8_u32_u16_offsets() {
    let layout = u16_u8_u32_u16();
    assert_eq!(layout.size(), 9);
    assert_eq!(layout.offset("foo"), Ok(0));
    assert_eq!(layout.offset("bar"), Ok(2));
    assert_eq!(layout.offset("baz"), Ok(3));
    assert_eq!(layout.offset("qux"), Ok(7));
}

#[test]
fn test_struct_u16_u8_u32_u16_values() {
    let layout = u16_u8_u32_u16();
    let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
    let view = layout.create(&bytes[..]).unwrap();

    assert_eq!(view.get("foo"), Ok(2 * 256 + 1));
    assert_eq!(view.get("bar"), Ok(3));
    assert_eq!(
        view.get("baz"),
        Ok(4 + 5 * 256 + 6 * 256u64.pow(2) + 7 * 256u64.pow(3))
    );
    assert_eq!(view.get("qux"), Ok(8 + 9 * 256));
}

#[test]
fn test_struct_u16_u8_u32_u16_set_bar() {
    let layout = u16_u8_u32_u16();
    let mut bytes = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];

    layout.create(&mut bytes[..]).unwrap().set("bar", 20).unwrap();
    assert_eq!(bytes, [1, 2, 20, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_struct_u16_u8_u32_u16_set_qux() {
    let layout = u16_u8_u32_u16();
    let mut bytes = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];

    layout.create(&mut bytes[..]).unwrap().set("qux", 20).unwrap();
    assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 20, 0]);
}

#[test]
fn test_rebind_same_layout() {
    let layout = u16_u8_u32_u16();
    let mut first = [0u8; 9];
    let mut second = [0xffu8; 9];

    layout.create(&mut first[..]).unwrap().set("baz", 1).unwrap();
    layout.create(&mut second[..]).unwrap().set("baz", 1).unwrap();

    assert_eq!(first, [0, 0, 0, 1, 0, 0, 0, 0, 0]);
    assert_eq!(second, [0xff, 0xff, 0xff, 1, 0, 0, 0, 0xff, 0xff]);
}

#[test]
fn test_wrong_buffer_size() {
    let layout = u16_u8_u32_u16();
    let bytes = [0u8; 8];

    assert_eq!(
        layout.create(&bytes[..]).unwrap_err(),
        BindError::SizeMismatch {
            expected: 9,
            actual: 8
        }
    );
    assert_eq!(
        BindError::SizeMismatch {
            expected: 9,
            actual: 8
        }
        .to_string(),
        "buffer has wrong size: expected 9 bytes, got 8"
    );
}

#[test]
fn test_layout_shared_across_threads() {
    let layout = std::sync::Arc::new(u16_u8_u32_u16());

    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let layout = layout.clone();
            std::thread::spawn(move || {
                let mut bytes = vec![0u8; layout.size()];
                layout.create(&mut bytes).unwrap().set("qux", i).unwrap();
                bytes
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap()[7], i as u8);
    }
}
