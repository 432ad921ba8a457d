use log::debug;

/// Byte wide access to the 64KB address space. The core borrows an
/// implementation for the duration of each `tick`; address decoding,
/// mirroring and memory mapped devices all live behind this trait.
pub trait MemoryBus {
    fn read_byte(&self, address: u16) -> u8;

    fn write_byte(&mut self, address: u16, value: u8);
}

/// Flat 64KB of RAM with no mapping policy, every address readable and
/// writable. Backs the tests and benches and works as a stand in until a
/// machine provides a real bus.
pub struct FlatMemory {
    bytes: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    pub fn new() -> Self {
        FlatMemory {
            bytes: Box::new([0; 0x10000]),
        }
    }

    /// Copies `program` into the address space starting at `address`,
    /// wrapping around at the top of memory
    pub fn load(&mut self, address: u16, program: &[u8]) {
        for (offset, byte) in program.iter().enumerate() {
            let target = address.wrapping_add(offset as u16);
            self.bytes[target as usize] = *byte;
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        FlatMemory::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read_byte(&self, address: u16) -> u8 {
        self.bytes[address as usize]
    }

    fn write_byte(&mut self, address: u16, value: u8) {
        debug!("Memory write {:04X} = {:02X}", address, value);

        self.bytes[address as usize] = value;
    }
}

#[cfg(test)]
mod flat_memory_tests {
    use super::{FlatMemory, MemoryBus};

    #[test]
    fn test_starts_zeroed() {
        let memory = FlatMemory::new();

        assert_eq!(0x00, memory.read_byte(0x0000));
        assert_eq!(0x00, memory.read_byte(0xFFFF));
    }

    #[test]
    fn test_write_then_read() {
        let mut memory = FlatMemory::new();
        memory.write_byte(0x8000, 0xAB);

        assert_eq!(0xAB, memory.read_byte(0x8000));
        assert_eq!(0x00, memory.read_byte(0x8001));
    }

    #[test]
    fn test_load_wraps_at_top_of_memory() {
        let mut memory = FlatMemory::new();
        memory.load(0xFFFE, &[0x01, 0x02, 0x03]);

        assert_eq!(0x01, memory.read_byte(0xFFFE));
        assert_eq!(0x02, memory.read_byte(0xFFFF));
        assert_eq!(0x03, memory.read_byte(0x0000));
    }
}
