//! Instruction level Intel 8080 interpreter. The `Cpu` holds nothing but
//! register and flag state; callers supply a [`MemoryBus`] on every `tick`
//! and drive execution one instruction at a time.

#[macro_use]
extern crate bitflags;
extern crate log;

mod cpu;
mod memory;

pub use cpu::opcodes::{Register, RegisterPair};
pub use cpu::registers::Registers;
pub use cpu::status_flags::StatusFlags;
pub use cpu::{Cpu, RESET_VECTOR};
pub use memory::{FlatMemory, MemoryBus};
