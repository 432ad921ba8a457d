use cpu::opcodes::RegisterPair;
use cpu::status_flags::StatusFlags;
use cpu::RESET_VECTOR;

/// The 8080 register file. Each general purpose pair is stored as a single
/// 16 bit cell; the 8 bit halves are derived by shift and mask so that the
/// combined and half views can never disagree (B is the high half of BC,
/// C the low half, and likewise for DE and HL).
#[derive(Debug)]
pub struct Registers {
    // Accumulator
    pub a: u8,

    // General purpose register pairs
    pub bc: u16,
    pub de: u16,
    pub hl: u16,

    pub stack_pointer: u16,
    pub program_counter: u16,
    pub status_register: StatusFlags,
}

impl Default for Registers {
    fn default() -> Self {
        Registers {
            a: 0x0,
            bc: 0x0,
            de: 0x0,
            hl: 0x0,
            stack_pointer: 0x0,
            program_counter: RESET_VECTOR,
            status_register: StatusFlags::empty(),
        }
    }
}

impl Registers {
    pub fn pair(&self, pair: RegisterPair) -> u16 {
        match pair {
            RegisterPair::BC => self.bc,
            RegisterPair::DE => self.de,
            RegisterPair::HL => self.hl,
            RegisterPair::SP => self.stack_pointer,
        }
    }

    pub fn set_pair(&mut self, pair: RegisterPair, value: u16) {
        match pair {
            RegisterPair::BC => self.bc = value,
            RegisterPair::DE => self.de = value,
            RegisterPair::HL => self.hl = value,
            RegisterPair::SP => self.stack_pointer = value,
        }
    }

    pub fn b(&self) -> u8 {
        (self.bc >> 8) as u8
    }

    pub fn set_b(&mut self, value: u8) {
        self.bc = (self.bc & 0x00FF) | ((value as u16) << 8);
    }

    pub fn c(&self) -> u8 {
        (self.bc & 0x00FF) as u8
    }

    pub fn set_c(&mut self, value: u8) {
        self.bc = (self.bc & 0xFF00) | value as u16;
    }

    pub fn d(&self) -> u8 {
        (self.de >> 8) as u8
    }

    pub fn set_d(&mut self, value: u8) {
        self.de = (self.de & 0x00FF) | ((value as u16) << 8);
    }

    pub fn e(&self) -> u8 {
        (self.de & 0x00FF) as u8
    }

    pub fn set_e(&mut self, value: u8) {
        self.de = (self.de & 0xFF00) | value as u16;
    }

    pub fn h(&self) -> u8 {
        (self.hl >> 8) as u8
    }

    pub fn set_h(&mut self, value: u8) {
        self.hl = (self.hl & 0x00FF) | ((value as u16) << 8);
    }

    pub fn l(&self) -> u8 {
        (self.hl & 0x00FF) as u8
    }

    pub fn set_l(&mut self, value: u8) {
        self.hl = (self.hl & 0xFF00) | value as u16;
    }
}

#[cfg(test)]
mod register_tests {
    use super::{RegisterPair, Registers, StatusFlags};

    #[test]
    fn test_pair_write_reads_back_as_halves() {
        let mut registers = Registers::default();

        registers.set_pair(RegisterPair::BC, 0x1234);
        assert_eq!(registers.b(), 0x12);
        assert_eq!(registers.c(), 0x34);

        registers.set_pair(RegisterPair::DE, 0xABCD);
        assert_eq!(registers.d(), 0xAB);
        assert_eq!(registers.e(), 0xCD);

        registers.set_pair(RegisterPair::HL, 0xFF01);
        assert_eq!(registers.h(), 0xFF);
        assert_eq!(registers.l(), 0x01);
    }

    #[test]
    fn test_half_writes_update_pair() {
        let mut registers = Registers::default();

        registers.set_b(0x12);
        registers.set_c(0x34);
        assert_eq!(registers.pair(RegisterPair::BC), 0x1234);

        registers.set_d(0x56);
        registers.set_e(0x78);
        assert_eq!(registers.pair(RegisterPair::DE), 0x5678);

        registers.set_h(0x9A);
        registers.set_l(0xBC);
        assert_eq!(registers.pair(RegisterPair::HL), 0x9ABC);
    }

    #[test]
    fn test_half_write_leaves_other_half_alone() {
        let mut registers = Registers::default();

        registers.set_pair(RegisterPair::HL, 0x1234);
        registers.set_h(0xFF);
        assert_eq!(registers.hl, 0xFF34);
        registers.set_l(0x00);
        assert_eq!(registers.hl, 0xFF00);
    }

    #[test]
    fn test_sp_addressable_as_pair() {
        let mut registers = Registers::default();

        registers.set_pair(RegisterPair::SP, 0xBEEF);
        assert_eq!(registers.stack_pointer, 0xBEEF);
        assert_eq!(registers.pair(RegisterPair::SP), 0xBEEF);
    }

    #[test]
    fn test_default_is_reset_state() {
        let registers = Registers::default();

        assert_eq!(registers.a, 0x00);
        assert_eq!(registers.bc, 0x0000);
        assert_eq!(registers.de, 0x0000);
        assert_eq!(registers.hl, 0x0000);
        assert_eq!(registers.stack_pointer, 0x0000);
        assert_eq!(registers.program_counter, 0x0000);
        assert_eq!(registers.status_register, StatusFlags::empty());
    }
}
