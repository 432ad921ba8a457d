use cpu::status_flags::StatusFlags;
use cpu::Cpu;
use memory::MemoryBus;
use std::fmt;

#[derive(Debug)]
pub(super) struct Opcode {
    pub(super) opcode: u8,
    pub(super) operation: Operation,
}

impl Opcode {
    pub(super) fn trace_log(&self, pc_1: u8, pc_2: u8) -> String {
        match self.operation.instruction_length() {
            InstructionLength::OneByte => format!(
                "{:02X}       {:12}",
                self.opcode,
                self.operation.mnemonic(pc_1, pc_2)
            ),
            InstructionLength::TwoByte => format!(
                "{:02X} {:02X}    {:12}",
                self.opcode,
                pc_1,
                self.operation.mnemonic(pc_1, pc_2)
            ),
            InstructionLength::ThreeByte => format!(
                "{:02X} {:02X} {:02X} {:12}",
                self.opcode,
                pc_1,
                pc_2,
                self.operation.mnemonic(pc_1, pc_2)
            ),
        }
    }

    pub(super) fn execute(&self, cpu: &mut Cpu, memory: &mut dyn MemoryBus) {
        match self.operation {
            Operation::CMA => {
                cpu.registers.a = !cpu.registers.a;
            }
            Operation::CMC => {
                cpu.registers
                    .status_register
                    .toggle(StatusFlags::CARRY_FLAG);
            }
            Operation::DAA => cpu.daa(),
            Operation::DAD(pair) => cpu.dad(pair),
            Operation::DCR(target) => cpu.dcr(memory, target),
            Operation::DCX(pair) => cpu.dcx(pair),
            Operation::INR(target) => cpu.inr(memory, target),
            Operation::INX(pair) => cpu.inx(pair),
            Operation::LDA => cpu.lda(memory),
            Operation::LDAX(pair) => cpu.ldax(memory, pair),
            Operation::LHLD => cpu.lhld(memory),
            Operation::LXI(pair) => cpu.lxi(memory, pair),
            Operation::MOV(destination, source) => cpu.mov(memory, destination, source),
            Operation::MVI(target) => cpu.mvi(memory, target),
            Operation::NOP => (),
            Operation::RAL => cpu.ral(),
            Operation::RAR => cpu.rar(),
            Operation::RLC => cpu.rlc(),
            Operation::RRC => cpu.rrc(),
            Operation::SHLD => cpu.shld(memory),
            Operation::STA => cpu.sta(memory),
            Operation::STAX(pair) => cpu.stax(memory, pair),
            Operation::STC => {
                cpu.registers
                    .status_register
                    .insert(StatusFlags::CARRY_FLAG);
            }
        }
    }
}

/// 8 bit operand slots in 8080 encoding order. `M` is not a register, it
/// addresses the memory byte at HL and costs a bus access to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    B,
    C,
    D,
    E,
    H,
    L,
    M,
    A,
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Register::B => "B",
            Register::C => "C",
            Register::D => "D",
            Register::E => "E",
            Register::H => "H",
            Register::L => "L",
            Register::M => "M",
            Register::A => "A",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterPair {
    BC,
    DE,
    HL,
    SP,
}

impl fmt::Display for RegisterPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Assembler convention names a pair by its high register
        let name = match self {
            RegisterPair::BC => "B",
            RegisterPair::DE => "D",
            RegisterPair::HL => "H",
            RegisterPair::SP => "SP",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Operation {
    CMA,
    CMC,
    DAA,
    DAD(RegisterPair),
    DCR(Register),
    DCX(RegisterPair),
    INR(Register),
    INX(RegisterPair),
    LDA,
    LDAX(RegisterPair),
    LHLD,
    LXI(RegisterPair),
    MOV(Register, Register),
    MVI(Register),
    NOP,
    RAL,
    RAR,
    RLC,
    RRC,
    SHLD,
    STA,
    STAX(RegisterPair),
    STC,
}

#[derive(Debug)]
pub(super) enum InstructionLength {
    OneByte,
    TwoByte,
    ThreeByte,
}

impl Operation {
    pub(super) fn instruction_length(&self) -> InstructionLength {
        match self {
            Operation::LXI(_)
            | Operation::SHLD
            | Operation::LHLD
            | Operation::STA
            | Operation::LDA => InstructionLength::ThreeByte,
            Operation::MVI(_) => InstructionLength::TwoByte,
            _ => InstructionLength::OneByte,
        }
    }

    fn mnemonic(&self, pc_1: u8, pc_2: u8) -> String {
        let word = pc_1 as u16 | ((pc_2 as u16) << 8);

        match self {
            Operation::CMA => "CMA".to_string(),
            Operation::CMC => "CMC".to_string(),
            Operation::DAA => "DAA".to_string(),
            Operation::DAD(pair) => format!("DAD {}", pair),
            Operation::DCR(target) => format!("DCR {}", target),
            Operation::DCX(pair) => format!("DCX {}", pair),
            Operation::INR(target) => format!("INR {}", target),
            Operation::INX(pair) => format!("INX {}", pair),
            Operation::LDA => format!("LDA ${:04X}", word),
            Operation::LDAX(pair) => format!("LDAX {}", pair),
            Operation::LHLD => format!("LHLD ${:04X}", word),
            Operation::LXI(pair) => format!("LXI {},${:04X}", pair, word),
            Operation::MOV(destination, source) => format!("MOV {},{}", destination, source),
            Operation::MVI(target) => format!("MVI {},${:02X}", target, pc_1),
            Operation::NOP => "NOP".to_string(),
            Operation::RAL => "RAL".to_string(),
            Operation::RAR => "RAR".to_string(),
            Operation::RLC => "RLC".to_string(),
            Operation::RRC => "RRC".to_string(),
            Operation::SHLD => format!("SHLD ${:04X}", word),
            Operation::STA => format!("STA ${:04X}", word),
            Operation::STAX(pair) => format!("STAX {}", pair),
            Operation::STC => "STC".to_string(),
        }
    }
}

/// One entry per opcode byte value, indexed by that value. The slots the
/// 8080 databook leaves unassigned (0x08, 0x10, 0x18, 0x20, 0x28, 0x30,
/// 0x38) act as NOP on real silicon and are bound to NOP here, as is
/// everything from 0x80 up, so any byte value dispatches somewhere.
pub(super) const OPCODE_TABLE: [Opcode; 0x100] = [
    // 0x00-0x0F
    Opcode { opcode: 0x00, operation: Operation::NOP },
    Opcode { opcode: 0x01, operation: Operation::LXI(RegisterPair::BC) },
    Opcode { opcode: 0x02, operation: Operation::STAX(RegisterPair::BC) },
    Opcode { opcode: 0x03, operation: Operation::INX(RegisterPair::BC) },
    Opcode { opcode: 0x04, operation: Operation::INR(Register::B) },
    Opcode { opcode: 0x05, operation: Operation::DCR(Register::B) },
    Opcode { opcode: 0x06, operation: Operation::MVI(Register::B) },
    Opcode { opcode: 0x07, operation: Operation::RLC },
    Opcode { opcode: 0x08, operation: Operation::NOP },
    Opcode { opcode: 0x09, operation: Operation::DAD(RegisterPair::BC) },
    Opcode { opcode: 0x0A, operation: Operation::LDAX(RegisterPair::BC) },
    Opcode { opcode: 0x0B, operation: Operation::DCX(RegisterPair::BC) },
    Opcode { opcode: 0x0C, operation: Operation::INR(Register::C) },
    Opcode { opcode: 0x0D, operation: Operation::DCR(Register::C) },
    Opcode { opcode: 0x0E, operation: Operation::MVI(Register::C) },
    Opcode { opcode: 0x0F, operation: Operation::RRC },
    // 0x10-0x1F
    Opcode { opcode: 0x10, operation: Operation::NOP },
    Opcode { opcode: 0x11, operation: Operation::LXI(RegisterPair::DE) },
    Opcode { opcode: 0x12, operation: Operation::STAX(RegisterPair::DE) },
    Opcode { opcode: 0x13, operation: Operation::INX(RegisterPair::DE) },
    Opcode { opcode: 0x14, operation: Operation::INR(Register::D) },
    Opcode { opcode: 0x15, operation: Operation::DCR(Register::D) },
    Opcode { opcode: 0x16, operation: Operation::MVI(Register::D) },
    Opcode { opcode: 0x17, operation: Operation::RAL },
    Opcode { opcode: 0x18, operation: Operation::NOP },
    Opcode { opcode: 0x19, operation: Operation::DAD(RegisterPair::DE) },
    Opcode { opcode: 0x1A, operation: Operation::LDAX(RegisterPair::DE) },
    Opcode { opcode: 0x1B, operation: Operation::DCX(RegisterPair::DE) },
    Opcode { opcode: 0x1C, operation: Operation::INR(Register::E) },
    Opcode { opcode: 0x1D, operation: Operation::DCR(Register::E) },
    Opcode { opcode: 0x1E, operation: Operation::MVI(Register::E) },
    Opcode { opcode: 0x1F, operation: Operation::RAR },
    // 0x20-0x2F
    Opcode { opcode: 0x20, operation: Operation::NOP },
    Opcode { opcode: 0x21, operation: Operation::LXI(RegisterPair::HL) },
    Opcode { opcode: 0x22, operation: Operation::SHLD },
    Opcode { opcode: 0x23, operation: Operation::INX(RegisterPair::HL) },
    Opcode { opcode: 0x24, operation: Operation::INR(Register::H) },
    Opcode { opcode: 0x25, operation: Operation::DCR(Register::H) },
    Opcode { opcode: 0x26, operation: Operation::MVI(Register::H) },
    Opcode { opcode: 0x27, operation: Operation::DAA },
    Opcode { opcode: 0x28, operation: Operation::NOP },
    Opcode { opcode: 0x29, operation: Operation::DAD(RegisterPair::HL) },
    Opcode { opcode: 0x2A, operation: Operation::LHLD },
    Opcode { opcode: 0x2B, operation: Operation::DCX(RegisterPair::HL) },
    Opcode { opcode: 0x2C, operation: Operation::INR(Register::L) },
    Opcode { opcode: 0x2D, operation: Operation::DCR(Register::L) },
    Opcode { opcode: 0x2E, operation: Operation::MVI(Register::L) },
    Opcode { opcode: 0x2F, operation: Operation::CMA },
    // 0x30-0x3F
    Opcode { opcode: 0x30, operation: Operation::NOP },
    Opcode { opcode: 0x31, operation: Operation::LXI(RegisterPair::SP) },
    Opcode { opcode: 0x32, operation: Operation::STA },
    Opcode { opcode: 0x33, operation: Operation::INX(RegisterPair::SP) },
    Opcode { opcode: 0x34, operation: Operation::INR(Register::M) },
    Opcode { opcode: 0x35, operation: Operation::DCR(Register::M) },
    Opcode { opcode: 0x36, operation: Operation::MVI(Register::M) },
    Opcode { opcode: 0x37, operation: Operation::STC },
    Opcode { opcode: 0x38, operation: Operation::NOP },
    Opcode { opcode: 0x39, operation: Operation::DAD(RegisterPair::SP) },
    Opcode { opcode: 0x3A, operation: Operation::LDA },
    Opcode { opcode: 0x3B, operation: Operation::DCX(RegisterPair::SP) },
    Opcode { opcode: 0x3C, operation: Operation::INR(Register::A) },
    Opcode { opcode: 0x3D, operation: Operation::DCR(Register::A) },
    Opcode { opcode: 0x3E, operation: Operation::MVI(Register::A) },
    Opcode { opcode: 0x3F, operation: Operation::CMC },
    // 0x40-0x4F
    Opcode { opcode: 0x40, operation: Operation::MOV(Register::B, Register::B) },
    Opcode { opcode: 0x41, operation: Operation::MOV(Register::B, Register::C) },
    Opcode { opcode: 0x42, operation: Operation::MOV(Register::B, Register::D) },
    Opcode { opcode: 0x43, operation: Operation::MOV(Register::B, Register::E) },
    Opcode { opcode: 0x44, operation: Operation::MOV(Register::B, Register::H) },
    Opcode { opcode: 0x45, operation: Operation::MOV(Register::B, Register::L) },
    Opcode { opcode: 0x46, operation: Operation::MOV(Register::B, Register::M) },
    Opcode { opcode: 0x47, operation: Operation::MOV(Register::B, Register::A) },
    Opcode { opcode: 0x48, operation: Operation::MOV(Register::C, Register::B) },
    Opcode { opcode: 0x49, operation: Operation::MOV(Register::C, Register::C) },
    Opcode { opcode: 0x4A, operation: Operation::MOV(Register::C, Register::D) },
    Opcode { opcode: 0x4B, operation: Operation::MOV(Register::C, Register::E) },
    Opcode { opcode: 0x4C, operation: Operation::MOV(Register::C, Register::H) },
    Opcode { opcode: 0x4D, operation: Operation::MOV(Register::C, Register::L) },
    Opcode { opcode: 0x4E, operation: Operation::MOV(Register::C, Register::M) },
    Opcode { opcode: 0x4F, operation: Operation::MOV(Register::C, Register::A) },
    // 0x50-0x5F
    Opcode { opcode: 0x50, operation: Operation::MOV(Register::D, Register::B) },
    Opcode { opcode: 0x51, operation: Operation::MOV(Register::D, Register::C) },
    Opcode { opcode: 0x52, operation: Operation::MOV(Register::D, Register::D) },
    Opcode { opcode: 0x53, operation: Operation::MOV(Register::D, Register::E) },
    Opcode { opcode: 0x54, operation: Operation::MOV(Register::D, Register::H) },
    Opcode { opcode: 0x55, operation: Operation::MOV(Register::D, Register::L) },
    Opcode { opcode: 0x56, operation: Operation::MOV(Register::D, Register::M) },
    Opcode { opcode: 0x57, operation: Operation::MOV(Register::D, Register::A) },
    Opcode { opcode: 0x58, operation: Operation::MOV(Register::E, Register::B) },
    Opcode { opcode: 0x59, operation: Operation::MOV(Register::E, Register::C) },
    Opcode { opcode: 0x5A, operation: Operation::MOV(Register::E, Register::D) },
    Opcode { opcode: 0x5B, operation: Operation::MOV(Register::E, Register::E) },
    Opcode { opcode: 0x5C, operation: Operation::MOV(Register::E, Register::H) },
    Opcode { opcode: 0x5D, operation: Operation::MOV(Register::E, Register::L) },
    Opcode { opcode: 0x5E, operation: Operation::MOV(Register::E, Register::M) },
    Opcode { opcode: 0x5F, operation: Operation::MOV(Register::E, Register::A) },
    // 0x60-0x6F
    Opcode { opcode: 0x60, operation: Operation::MOV(Register::H, Register::B) },
    Opcode { opcode: 0x61, operation: Operation::MOV(Register::H, Register::C) },
    Opcode { opcode: 0x62, operation: Operation::MOV(Register::H, Register::D) },
    Opcode { opcode: 0x63, operation: Operation::MOV(Register::H, Register::E) },
    Opcode { opcode: 0x64, operation: Operation::MOV(Register::H, Register::H) },
    Opcode { opcode: 0x65, operation: Operation::MOV(Register::H, Register::L) },
    Opcode { opcode: 0x66, operation: Operation::MOV(Register::H, Register::M) },
    Opcode { opcode: 0x67, operation: Operation::MOV(Register::H, Register::A) },
    Opcode { opcode: 0x68, operation: Operation::MOV(Register::L, Register::B) },
    Opcode { opcode: 0x69, operation: Operation::MOV(Register::L, Register::C) },
    Opcode { opcode: 0x6A, operation: Operation::MOV(Register::L, Register::D) },
    Opcode { opcode: 0x6B, operation: Operation::MOV(Register::L, Register::E) },
    Opcode { opcode: 0x6C, operation: Operation::MOV(Register::L, Register::H) },
    Opcode { opcode: 0x6D, operation: Operation::MOV(Register::L, Register::L) },
    Opcode { opcode: 0x6E, operation: Operation::MOV(Register::L, Register::M) },
    Opcode { opcode: 0x6F, operation: Operation::MOV(Register::L, Register::A) },
    // 0x70-0x7F
    Opcode { opcode: 0x70, operation: Operation::MOV(Register::M, Register::B) },
    Opcode { opcode: 0x71, operation: Operation::MOV(Register::M, Register::C) },
    Opcode { opcode: 0x72, operation: Operation::MOV(Register::M, Register::D) },
    Opcode { opcode: 0x73, operation: Operation::MOV(Register::M, Register::E) },
    Opcode { opcode: 0x74, operation: Operation::MOV(Register::M, Register::H) },
    Opcode { opcode: 0x75, operation: Operation::MOV(Register::M, Register::L) },
    // HLT occupies the would-be MOV M,M slot; treated as NOP here
    Opcode { opcode: 0x76, operation: Operation::NOP },
    Opcode { opcode: 0x77, operation: Operation::MOV(Register::M, Register::A) },
    Opcode { opcode: 0x78, operation: Operation::MOV(Register::A, Register::B) },
    Opcode { opcode: 0x79, operation: Operation::MOV(Register::A, Register::C) },
    Opcode { opcode: 0x7A, operation: Operation::MOV(Register::A, Register::D) },
    Opcode { opcode: 0x7B, operation: Operation::MOV(Register::A, Register::E) },
    Opcode { opcode: 0x7C, operation: Operation::MOV(Register::A, Register::H) },
    Opcode { opcode: 0x7D, operation: Operation::MOV(Register::A, Register::L) },
    Opcode { opcode: 0x7E, operation: Operation::MOV(Register::A, Register::M) },
    Opcode { opcode: 0x7F, operation: Operation::MOV(Register::A, Register::A) },
    // 0x80-0x8F
    Opcode { opcode: 0x80, operation: Operation::NOP },
    Opcode { opcode: 0x81, operation: Operation::NOP },
    Opcode { opcode: 0x82, operation: Operation::NOP },
    Opcode { opcode: 0x83, operation: Operation::NOP },
    Opcode { opcode: 0x84, operation: Operation::NOP },
    Opcode { opcode: 0x85, operation: Operation::NOP },
    Opcode { opcode: 0x86, operation: Operation::NOP },
    Opcode { opcode: 0x87, operation: Operation::NOP },
    Opcode { opcode: 0x88, operation: Operation::NOP },
    Opcode { opcode: 0x89, operation: Operation::NOP },
    Opcode { opcode: 0x8A, operation: Operation::NOP },
    Opcode { opcode: 0x8B, operation: Operation::NOP },
    Opcode { opcode: 0x8C, operation: Operation::NOP },
    Opcode { opcode: 0x8D, operation: Operation::NOP },
    Opcode { opcode: 0x8E, operation: Operation::NOP },
    Opcode { opcode: 0x8F, operation: Operation::NOP },
    // 0x90-0x9F
    Opcode { opcode: 0x90, operation: Operation::NOP },
    Opcode { opcode: 0x91, operation: Operation::NOP },
    Opcode { opcode: 0x92, operation: Operation::NOP },
    Opcode { opcode: 0x93, operation: Operation::NOP },
    Opcode { opcode: 0x94, operation: Operation::NOP },
    Opcode { opcode: 0x95, operation: Operation::NOP },
    Opcode { opcode: 0x96, operation: Operation::NOP },
    Opcode { opcode: 0x97, operation: Operation::NOP },
    Opcode { opcode: 0x98, operation: Operation::NOP },
    Opcode { opcode: 0x99, operation: Operation::NOP },
    Opcode { opcode: 0x9A, operation: Operation::NOP },
    Opcode { opcode: 0x9B, operation: Operation::NOP },
    Opcode { opcode: 0x9C, operation: Operation::NOP },
    Opcode { opcode: 0x9D, operation: Operation::NOP },
    Opcode { opcode: 0x9E, operation: Operation::NOP },
    Opcode { opcode: 0x9F, operation: Operation::NOP },
    // 0xA0-0xAF
    Opcode { opcode: 0xA0, operation: Operation::NOP },
    Opcode { opcode: 0xA1, operation: Operation::NOP },
    Opcode { opcode: 0xA2, operation: Operation::NOP },
    Opcode { opcode: 0xA3, operation: Operation::NOP },
    Opcode { opcode: 0xA4, operation: Operation::NOP },
    Opcode { opcode: 0xA5, operation: Operation::NOP },
    Opcode { opcode: 0xA6, operation: Operation::NOP },
    Opcode { opcode: 0xA7, operation: Operation::NOP },
    Opcode { opcode: 0xA8, operation: Operation::NOP },
    Opcode { opcode: 0xA9, operation: Operation::NOP },
    Opcode { opcode: 0xAA, operation: Operation::NOP },
    Opcode { opcode: 0xAB, operation: Operation::NOP },
    Opcode { opcode: 0xAC, operation: Operation::NOP },
    Opcode { opcode: 0xAD, operation: Operation::NOP },
    Opcode { opcode: 0xAE, operation: Operation::NOP },
    Opcode { opcode: 0xAF, operation: Operation::NOP },
    // 0xB0-0xBF
    Opcode { opcode: 0xB0, operation: Operation::NOP },
    Opcode { opcode: 0xB1, operation: Operation::NOP },
    Opcode { opcode: 0xB2, operation: Operation::NOP },
    Opcode { opcode: 0xB3, operation: Operation::NOP },
    Opcode { opcode: 0xB4, operation: Operation::NOP },
    Opcode { opcode: 0xB5, operation: Operation::NOP },
    Opcode { opcode: 0xB6, operation: Operation::NOP },
    Opcode { opcode: 0xB7, operation: Operation::NOP },
    Opcode { opcode: 0xB8, operation: Operation::NOP },
    Opcode { opcode: 0xB9, operation: Operation::NOP },
    Opcode { opcode: 0xBA, operation: Operation::NOP },
    Opcode { opcode: 0xBB, operation: Operation::NOP },
    Opcode { opcode: 0xBC, operation: Operation::NOP },
    Opcode { opcode: 0xBD, operation: Operation::NOP },
    Opcode { opcode: 0xBE, operation: Operation::NOP },
    Opcode { opcode: 0xBF, operation: Operation::NOP },
    // 0xC0-0xCF
    Opcode { opcode: 0xC0, operation: Operation::NOP },
    Opcode { opcode: 0xC1, operation: Operation::NOP },
    Opcode { opcode: 0xC2, operation: Operation::NOP },
    Opcode { opcode: 0xC3, operation: Operation::NOP },
    Opcode { opcode: 0xC4, operation: Operation::NOP },
    Opcode { opcode: 0xC5, operation: Operation::NOP },
    Opcode { opcode: 0xC6, operation: Operation::NOP },
    Opcode { opcode: 0xC7, operation: Operation::NOP },
    Opcode { opcode: 0xC8, operation: Operation::NOP },
    Opcode { opcode: 0xC9, operation: Operation::NOP },
    Opcode { opcode: 0xCA, operation: Operation::NOP },
    Opcode { opcode: 0xCB, operation: Operation::NOP },
    Opcode { opcode: 0xCC, operation: Operation::NOP },
    Opcode { opcode: 0xCD, operation: Operation::NOP },
    Opcode { opcode: 0xCE, operation: Operation::NOP },
    Opcode { opcode: 0xCF, operation: Operation::NOP },
    // 0xD0-0xDF
    Opcode { opcode: 0xD0, operation: Operation::NOP },
    Opcode { opcode: 0xD1, operation: Operation::NOP },
    Opcode { opcode: 0xD2, operation: Operation::NOP },
    Opcode { opcode: 0xD3, operation: Operation::NOP },
    Opcode { opcode: 0xD4, operation: Operation::NOP },
    Opcode { opcode: 0xD5, operation: Operation::NOP },
    Opcode { opcode: 0xD6, operation: Operation::NOP },
    Opcode { opcode: 0xD7, operation: Operation::NOP },
    Opcode { opcode: 0xD8, operation: Operation::NOP },
    Opcode { opcode: 0xD9, operation: Operation::NOP },
    Opcode { opcode: 0xDA, operation: Operation::NOP },
    Opcode { opcode: 0xDB, operation: Operation::NOP },
    Opcode { opcode: 0xDC, operation: Operation::NOP },
    Opcode { opcode: 0xDD, operation: Operation::NOP },
    Opcode { opcode: 0xDE, operation: Operation::NOP },
    Opcode { opcode: 0xDF, operation: Operation::NOP },
    // 0xE0-0xEF
    Opcode { opcode: 0xE0, operation: Operation::NOP },
    Opcode { opcode: 0xE1, operation: Operation::NOP },
    Opcode { opcode: 0xE2, operation: Operation::NOP },
    Opcode { opcode: 0xE3, operation: Operation::NOP },
    Opcode { opcode: 0xE4, operation: Operation::NOP },
    Opcode { opcode: 0xE5, operation: Operation::NOP },
    Opcode { opcode: 0xE6, operation: Operation::NOP },
    Opcode { opcode: 0xE7, operation: Operation::NOP },
    Opcode { opcode: 0xE8, operation: Operation::NOP },
    Opcode { opcode: 0xE9, operation: Operation::NOP },
    Opcode { opcode: 0xEA, operation: Operation::NOP },
    Opcode { opcode: 0xEB, operation: Operation::NOP },
    Opcode { opcode: 0xEC, operation: Operation::NOP },
    Opcode { opcode: 0xED, operation: Operation::NOP },
    Opcode { opcode: 0xEE, operation: Operation::NOP },
    Opcode { opcode: 0xEF, operation: Operation::NOP },
    // 0xF0-0xFF
    Opcode { opcode: 0xF0, operation: Operation::NOP },
    Opcode { opcode: 0xF1, operation: Operation::NOP },
    Opcode { opcode: 0xF2, operation: Operation::NOP },
    Opcode { opcode: 0xF3, operation: Operation::NOP },
    Opcode { opcode: 0xF4, operation: Operation::NOP },
    Opcode { opcode: 0xF5, operation: Operation::NOP },
    Opcode { opcode: 0xF6, operation: Operation::NOP },
    Opcode { opcode: 0xF7, operation: Operation::NOP },
    Opcode { opcode: 0xF8, operation: Operation::NOP },
    Opcode { opcode: 0xF9, operation: Operation::NOP },
    Opcode { opcode: 0xFA, operation: Operation::NOP },
    Opcode { opcode: 0xFB, operation: Operation::NOP },
    Opcode { opcode: 0xFC, operation: Operation::NOP },
    Opcode { opcode: 0xFD, operation: Operation::NOP },
    Opcode { opcode: 0xFE, operation: Operation::NOP },
    Opcode { opcode: 0xFF, operation: Operation::NOP },
];

#[cfg(test)]
mod opcode_table_tests {
    use super::{Operation, Register, RegisterPair, OPCODE_TABLE};

    const ENCODING_ORDER: [Register; 8] = [
        Register::B,
        Register::C,
        Register::D,
        Register::E,
        Register::H,
        Register::L,
        Register::M,
        Register::A,
    ];

    #[test]
    fn test_table_entries_match_index() {
        for (index, opcode) in OPCODE_TABLE.iter().enumerate() {
            assert_eq!(index as u8, opcode.opcode);
        }
    }

    #[test]
    fn test_mov_block_decodes_destination_and_source_bits() {
        for value in 0x40..=0x7Fu8 {
            if value == 0x76 {
                continue;
            }

            let destination = ENCODING_ORDER[(value as usize >> 3) & 0b111];
            let source = ENCODING_ORDER[value as usize & 0b111];
            assert_eq!(
                Operation::MOV(destination, source),
                OPCODE_TABLE[value as usize].operation,
                "wrong decode for {:02X}",
                value
            );
        }
    }

    #[test]
    fn test_mov_memory_to_memory_is_never_generated() {
        for opcode in OPCODE_TABLE.iter() {
            assert_ne!(Operation::MOV(Register::M, Register::M), opcode.operation);
        }
    }

    #[test]
    fn test_halt_slot_is_bound_to_nop() {
        assert_eq!(Operation::NOP, OPCODE_TABLE[0x76].operation);
    }

    #[test]
    fn test_unassigned_slots_are_bound_to_nop() {
        for value in [0x08u8, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38].iter() {
            assert_eq!(Operation::NOP, OPCODE_TABLE[*value as usize].operation);
        }

        for value in 0x80..=0xFFu8 {
            assert_eq!(Operation::NOP, OPCODE_TABLE[value as usize].operation);
        }
    }

    #[test]
    fn test_register_family_target_bindings() {
        assert_eq!(Operation::INR(Register::H), OPCODE_TABLE[0x24].operation);
        assert_eq!(Operation::INX(RegisterPair::SP), OPCODE_TABLE[0x33].operation);
        assert_eq!(Operation::INR(Register::M), OPCODE_TABLE[0x34].operation);
        assert_eq!(Operation::DCR(Register::M), OPCODE_TABLE[0x35].operation);
        assert_eq!(Operation::MVI(Register::M), OPCODE_TABLE[0x36].operation);
        assert_eq!(Operation::DAD(RegisterPair::SP), OPCODE_TABLE[0x39].operation);
        assert_eq!(Operation::DCX(RegisterPair::SP), OPCODE_TABLE[0x3B].operation);
        assert_eq!(Operation::INR(Register::A), OPCODE_TABLE[0x3C].operation);
        assert_eq!(Operation::DCR(Register::A), OPCODE_TABLE[0x3D].operation);
        assert_eq!(Operation::MVI(Register::A), OPCODE_TABLE[0x3E].operation);
    }

    #[test]
    fn test_mnemonic_rendering() {
        assert_eq!("LXI B,$1234", OPCODE_TABLE[0x01].operation.mnemonic(0x34, 0x12));
        assert_eq!("MVI M,$42", OPCODE_TABLE[0x36].operation.mnemonic(0x42, 0x00));
        assert_eq!("MOV A,M", OPCODE_TABLE[0x7E].operation.mnemonic(0x00, 0x00));
        assert_eq!("DAD SP", OPCODE_TABLE[0x39].operation.mnemonic(0x00, 0x00));
        assert_eq!("SHLD $010A", OPCODE_TABLE[0x22].operation.mnemonic(0x0A, 0x01));
    }
}
