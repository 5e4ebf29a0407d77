mod common;

use std::fs;

use tempfile::tempdir;

use dotmatrix_core::cartridge::{Cartridge, CartridgeError, Header};

#[test]
fn loads_a_valid_image_from_disk() {
    let dir = tempdir().unwrap();
    let rom_path = dir.path().join("game.gb");
    fs::write(&rom_path, common::build_rom(&[0x00, 0x76])).unwrap();

    let cart = Cartridge::from_file(&rom_path).unwrap();
    assert!(cart.verify_logo());
    assert!(cart.header_checksum_ok());

    let header = cart.header().unwrap();
    assert_eq!(header.title(), "TEST");
    assert_eq!(header.licensee_name(), "None");
    assert_eq!(header.type_name(), "ROM ONLY");
    assert_eq!(header.rom_size_kib(), 32);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = Cartridge::from_file(dir.path().join("nope.gb")).unwrap_err();
    assert!(matches!(err, CartridgeError::Io(_)));
}

#[test]
fn truncated_image_is_rejected() {
    let dir = tempdir().unwrap();
    let rom_path = dir.path().join("short.gb");
    fs::write(&rom_path, [0u8; 0x120]).unwrap();

    let err = Cartridge::from_file(&rom_path).unwrap_err();
    assert!(matches!(err, CartridgeError::TooSmall(0x120)));
}

#[test]
fn corrupt_logo_still_loads_but_fails_verification() {
    let dir = tempdir().unwrap();
    let rom_path = dir.path().join("badlogo.gb");
    let mut rom = common::build_rom(&[]);
    rom[0x0104] ^= 0xFF;
    fs::write(&rom_path, rom).unwrap();

    let cart = Cartridge::from_file(&rom_path).unwrap();
    assert!(!cart.verify_logo());
}

#[test]
fn header_round_trips_through_parse_and_serialize() {
    let rom = common::build_rom(&[]);
    let header = Header::parse(&rom).unwrap();
    assert_eq!(&header.to_bytes()[..], &rom[0x0100..0x0150]);
}
