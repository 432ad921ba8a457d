pub(crate) mod opcodes;
pub(crate) mod registers;
pub(crate) mod status_flags;

use cpu::opcodes::Opcode;
use cpu::opcodes::{Register, RegisterPair, OPCODE_TABLE};
use cpu::registers::Registers;
use cpu::status_flags::StatusFlags;
use log::debug;
use memory::MemoryBus;

/// Address from which the first opcode is fetched after power on or reset
pub const RESET_VECTOR: u16 = 0x0000;

/// An 8080 execution core. It owns nothing but the register file; all
/// memory access goes through the bus handed to each `tick` call so the
/// same core can be wired to whatever address decoding the machine needs.
pub struct Cpu {
    pub registers: Registers,
}

impl Cpu {
    pub fn new() -> Self {
        Cpu {
            registers: Registers::default(),
        }
    }

    /// Returns every register and flag to its power on value with the
    /// program counter back at the reset vector. Memory is not touched.
    pub fn reset(&mut self) {
        debug!("Processor reset");

        self.registers = Registers::default();
    }

    /// Fetches the byte at the program counter, advances it and executes
    /// the instruction the opcode table binds to that byte value. Every
    /// value maps to some handler so this cannot fail; slots without
    /// assigned semantics behave as NOP.
    pub fn tick(&mut self, memory: &mut dyn MemoryBus) {
        let opcode = &OPCODE_TABLE[self.read_and_inc_program_counter(memory) as usize];

        debug!("{}", self.trace_log(opcode, memory));

        opcode.execute(self, memory);
    }

    fn trace_log(&self, opcode: &Opcode, memory: &dyn MemoryBus) -> String {
        let pc_1 = memory.read_byte(self.registers.program_counter);
        let pc_2 = memory.read_byte(self.registers.program_counter.wrapping_add(1));
        format!(
            "{:04X}  {:} A:{:02X} BC:{:04X} DE:{:04X} HL:{:04X} SP:{:04X} F:{:02X}",
            self.registers.program_counter.wrapping_sub(1),
            opcode.trace_log(pc_1, pc_2),
            self.registers.a,
            self.registers.bc,
            self.registers.de,
            self.registers.hl,
            self.registers.stack_pointer,
            self.registers.status_register.bits(),
        )
    }

    fn read_and_inc_program_counter(&mut self, memory: &dyn MemoryBus) -> u8 {
        let value = memory.read_byte(self.registers.program_counter);
        self.registers.program_counter = self.registers.program_counter.wrapping_add(1);

        value
    }

    fn read_word_and_inc_program_counter(&mut self, memory: &dyn MemoryBus) -> u16 {
        let low_byte = self.read_and_inc_program_counter(memory);
        let high_byte = self.read_and_inc_program_counter(memory);

        low_byte as u16 | ((high_byte as u16) << 8)
    }

    fn read_register(&self, memory: &dyn MemoryBus, register: Register) -> u8 {
        match register {
            Register::B => self.registers.b(),
            Register::C => self.registers.c(),
            Register::D => self.registers.d(),
            Register::E => self.registers.e(),
            Register::H => self.registers.h(),
            Register::L => self.registers.l(),
            Register::M => memory.read_byte(self.registers.hl),
            Register::A => self.registers.a,
        }
    }

    fn write_register(&mut self, memory: &mut dyn MemoryBus, register: Register, value: u8) {
        match register {
            Register::B => self.registers.set_b(value),
            Register::C => self.registers.set_c(value),
            Register::D => self.registers.set_d(value),
            Register::E => self.registers.set_e(value),
            Register::H => self.registers.set_h(value),
            Register::L => self.registers.set_l(value),
            Register::M => memory.write_byte(self.registers.hl, value),
            Register::A => self.registers.a = value,
        }
    }

    /// Recomputes Sign, Zero and Parity from an 8 bit result. Carry and
    /// auxiliary carry depend on the operands rather than the result alone
    /// so the individual handlers deal with those.
    fn set_sign_zero_parity_flags(&mut self, result: u8) {
        self.registers
            .status_register
            .set(StatusFlags::SIGN_FLAG, result & 0b1000_0000 != 0);
        self.registers
            .status_register
            .set(StatusFlags::ZERO_FLAG, result == 0);
        self.registers
            .status_register
            .set(StatusFlags::PARITY_FLAG, result.count_ones() % 2 == 0);
    }

    fn lxi(&mut self, memory: &mut dyn MemoryBus, pair: RegisterPair) {
        let value = self.read_word_and_inc_program_counter(memory);
        self.registers.set_pair(pair, value);
    }

    fn stax(&mut self, memory: &mut dyn MemoryBus, pair: RegisterPair) {
        memory.write_byte(self.registers.pair(pair), self.registers.a);
    }

    fn ldax(&mut self, memory: &dyn MemoryBus, pair: RegisterPair) {
        self.registers.a = memory.read_byte(self.registers.pair(pair));
    }

    fn sta(&mut self, memory: &mut dyn MemoryBus) {
        let address = self.read_word_and_inc_program_counter(memory);
        memory.write_byte(address, self.registers.a);
    }

    fn lda(&mut self, memory: &mut dyn MemoryBus) {
        let address = self.read_word_and_inc_program_counter(memory);
        self.registers.a = memory.read_byte(address);
    }

    fn shld(&mut self, memory: &mut dyn MemoryBus) {
        let address = self.read_word_and_inc_program_counter(memory);
        memory.write_byte(address, self.registers.l());
        memory.write_byte(address.wrapping_add(1), self.registers.h());
    }

    fn lhld(&mut self, memory: &mut dyn MemoryBus) {
        let address = self.read_word_and_inc_program_counter(memory);
        self.registers.set_l(memory.read_byte(address));
        self.registers.set_h(memory.read_byte(address.wrapping_add(1)));
    }

    fn mvi(&mut self, memory: &mut dyn MemoryBus, target: Register) {
        let value = self.read_and_inc_program_counter(memory);
        self.write_register(memory, target, value);
    }

    fn mov(&mut self, memory: &mut dyn MemoryBus, destination: Register, source: Register) {
        let value = self.read_register(memory, source);
        self.write_register(memory, destination, value);
    }

    fn inx(&mut self, pair: RegisterPair) {
        self.registers
            .set_pair(pair, self.registers.pair(pair).wrapping_add(1));
    }

    fn dcx(&mut self, pair: RegisterPair) {
        self.registers
            .set_pair(pair, self.registers.pair(pair).wrapping_sub(1));
    }

    fn inr(&mut self, memory: &mut dyn MemoryBus, target: Register) {
        let result = self.read_register(memory, target).wrapping_add(1);
        self.registers
            .status_register
            .set(StatusFlags::AUX_CARRY_FLAG, result & 0x0F == 0x00);
        self.set_sign_zero_parity_flags(result);
        self.write_register(memory, target, result);
    }

    fn dcr(&mut self, memory: &mut dyn MemoryBus, target: Register) {
        let result = self.read_register(memory, target).wrapping_sub(1);
        // The 8080 runs subtraction through its adder, so auxiliary carry
        // on a decrement means "no borrow out of bit 3"
        self.registers
            .status_register
            .set(StatusFlags::AUX_CARRY_FLAG, result & 0x0F != 0x0F);
        self.set_sign_zero_parity_flags(result);
        self.write_register(memory, target, result);
    }

    fn dad(&mut self, pair: RegisterPair) {
        let sum = self.registers.hl as u32 + self.registers.pair(pair) as u32;
        self.registers
            .status_register
            .set(StatusFlags::CARRY_FLAG, sum > 0xFFFF);
        self.registers.hl = sum as u16;
    }

    fn rlc(&mut self) {
        self.registers
            .status_register
            .set(StatusFlags::CARRY_FLAG, self.registers.a & 0b1000_0000 != 0);
        self.registers.a = self.registers.a.rotate_left(1);
    }

    fn rrc(&mut self) {
        self.registers
            .status_register
            .set(StatusFlags::CARRY_FLAG, self.registers.a & 1 == 1);
        self.registers.a = self.registers.a.rotate_right(1);
    }

    fn ral(&mut self) {
        let mut result = self.registers.a << 1;
        if self
            .registers
            .status_register
            .contains(StatusFlags::CARRY_FLAG)
        {
            result |= 1;
        }
        self.registers
            .status_register
            .set(StatusFlags::CARRY_FLAG, self.registers.a & 0b1000_0000 != 0);
        self.registers.a = result;
    }

    fn rar(&mut self) {
        let mut result = self.registers.a >> 1;
        if self
            .registers
            .status_register
            .contains(StatusFlags::CARRY_FLAG)
        {
            result |= 0b1000_0000;
        }
        self.registers
            .status_register
            .set(StatusFlags::CARRY_FLAG, self.registers.a & 1 == 1);
        self.registers.a = result;
    }

    fn daa(&mut self) {
        let mut correction = 0u8;
        let mut carry = self
            .registers
            .status_register
            .contains(StatusFlags::CARRY_FLAG);
        let low_nibble = self.registers.a & 0x0F;
        let high_nibble = self.registers.a >> 4;

        if low_nibble > 9
            || self
                .registers
                .status_register
                .contains(StatusFlags::AUX_CARRY_FLAG)
        {
            correction += 0x06;
        }

        // Carry out of the high nibble is sticky; the adjustment itself can
        // never clear a carry that is already set
        if high_nibble > 9 || carry || (high_nibble == 9 && low_nibble > 9) {
            correction += 0x60;
            carry = true;
        }

        let result = self.registers.a.wrapping_add(correction);
        self.registers.status_register.set(
            StatusFlags::AUX_CARRY_FLAG,
            low_nibble + (correction & 0x0F) > 0x0F,
        );
        self.set_sign_zero_parity_flags(result);
        self.registers
            .status_register
            .set(StatusFlags::CARRY_FLAG, carry);
        self.registers.a = result;
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Cpu::new()
    }
}
