//! DMG Game Boy emulation core.
//!
//! This crate contains the platform-agnostic machine: the SM83 CPU
//! interpreter, the memory bus, the RAM regions, and the cartridge loader.
//! Front-ends drive it through the [`gameboy`] facade and learn about
//! illegal accesses and undefined opcodes through the typed observer in
//! [`diagnostics`]. Video, audio, timers, joypad, and MBC banking are not
//! emulated yet; their address windows are stubbed at the bus level.

/// Address-decoded fan-out to cartridge, RAM regions, I/O, and IE.
pub mod bus;

/// Cartridge image, header parsing, and load-time verification.
pub mod cartridge;

/// SM83 CPU core.
pub mod cpu;

/// Structured fault events and the observer that receives them.
pub mod diagnostics;

/// High-level facade that wires the CPU and bus into a single machine.
pub mod gameboy;

/// Raw RAM regions behind the bus.
pub mod memory;

/// Primary opcode descriptor table.
pub mod opcodes;
