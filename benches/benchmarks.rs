extern crate criterion;
extern crate rust_8080;

use criterion::{criterion_group, criterion_main, Criterion};
use rust_8080::{Cpu, FlatMemory};

/// A 16 byte block mixing register, memory, rotate and decimal adjust
/// instructions. Repeated through the whole address space it forms an
/// endless straight line program because the program counter wraps at
/// the top of memory.
const INSTRUCTION_MIX: [u8; 16] = [
    0x21, 0x00, 0x20, // LXI H,$2000
    0x36, 0x5A, // MVI M,$5A
    0x34, // INR M
    0x7E, // MOV A,M
    0x07, // RLC
    0x27, // DAA
    0x09, // DAD B
    0x03, // INX B
    0x78, // MOV A,B
    0x1F, // RAR
    0x32, 0x00, 0x21, // STA $2100
];

fn run_instruction_mix(ticks: usize) {
    let mut memory = FlatMemory::new();
    for block in 0..(0x10000 / INSTRUCTION_MIX.len()) {
        memory.load((block * INSTRUCTION_MIX.len()) as u16, &INSTRUCTION_MIX);
    }

    let mut cpu = Cpu::new();
    for _ in 0..ticks {
        cpu.tick(&mut memory);
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("instruction mix 1M instructions", |b| {
        b.iter(|| run_instruction_mix(1_000_000))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
