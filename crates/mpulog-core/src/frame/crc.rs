/// CRC-8 used by the MPU logger firmware.
///
/// Polynomial 0x07 (generator x^8 + x^2 + x + 1), initial value 0,
/// MSB-first, input and output not reflected, no final XOR.
///
/// # Examples
/// ```
/// use mpulog_core::crc8;
///
/// assert_eq!(crc8(b"123456789"), 0xF4);
/// assert_eq!(crc8(&[]), 0x00);
/// ```
pub fn crc8(bytes: &[u8]) -> u8 {
    let mut crc: u8 = 0x00;
    for &byte in bytes {
        crc ^= byte;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ 0x07;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}
