//! # RAM Tests

use ls8_core::common::Trap;
use ls8_core::soc::Ram;

#[test]
fn test_new_is_zeroed() {
    let ram = Ram::new(256);
    assert_eq!(ram.size(), 256);
    assert!(ram.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_read_write() {
    let mut ram = Ram::new(256);
    ram.write(0, 1).unwrap();
    ram.write(255, 0xEE).unwrap();
    assert_eq!(ram.read(0), Ok(1));
    assert_eq!(ram.read(255), Ok(0xEE));
}

#[test]
fn test_out_of_bounds_access() {
    let mut ram = Ram::new(256);
    assert_eq!(ram.read(256), Err(Trap::AddressOutOfBounds(256)));
    assert_eq!(ram.write(300, 1), Err(Trap::AddressOutOfBounds(300)));
    assert_eq!(ram.peek(256), None);
}

#[test]
fn test_load_image_at_zero() {
    let mut ram = Ram::new(16);
    ram.load_image(&[1, 2, 3]).unwrap();
    assert_eq!(&ram.as_slice()[..4], &[1, 2, 3, 0]);
}

#[test]
fn test_oversized_image_leaves_memory_untouched() {
    let mut ram = Ram::new(4);
    ram.write(0, 9).unwrap();
    assert_eq!(
        ram.load_image(&[1, 2, 3, 4, 5]),
        Err(Trap::AddressOutOfBounds(4))
    );
    assert_eq!(ram.as_slice(), &[9, 0, 0, 0]);
}
