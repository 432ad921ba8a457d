bitflags! {
  /// The five 8080 condition flags, held at their processor status word bit
  /// positions (bits 1, 3 and 5 of the PSW are fixed values, not flags)
  #[derive(Default)]
  pub struct StatusFlags: u8 {
    const CARRY_FLAG     = 0b0000_0001;
    const PARITY_FLAG    = 0b0000_0100;
    const AUX_CARRY_FLAG = 0b0001_0000;
    const ZERO_FLAG      = 0b0100_0000;
    const SIGN_FLAG      = 0b1000_0000;
  }
}

#[cfg(test)]
mod status_flag_tests {
    use super::StatusFlags;

    #[test]
    fn test_empty_status() {
        let f = StatusFlags::empty();
        assert_eq!(f.is_empty(), true);
        assert_eq!("(empty)", format!("{:?}", f));
    }

    #[test]
    fn test_all_set() {
        let f = StatusFlags::CARRY_FLAG
            | StatusFlags::PARITY_FLAG
            | StatusFlags::AUX_CARRY_FLAG
            | StatusFlags::ZERO_FLAG
            | StatusFlags::SIGN_FLAG;
        assert_ne!(f.is_empty(), true);
        assert_eq!(
            "CARRY_FLAG | PARITY_FLAG | AUX_CARRY_FLAG | ZERO_FLAG | SIGN_FLAG",
            format!("{:?}", f)
        )
    }

    #[test]
    fn test_flag_bit_positions() {
        assert_eq!(StatusFlags::CARRY_FLAG.bits(), 0x01);
        assert_eq!(StatusFlags::PARITY_FLAG.bits(), 0x04);
        assert_eq!(StatusFlags::AUX_CARRY_FLAG.bits(), 0x10);
        assert_eq!(StatusFlags::ZERO_FLAG.bits(), 0x40);
        assert_eq!(StatusFlags::SIGN_FLAG.bits(), 0x80);
    }
}
