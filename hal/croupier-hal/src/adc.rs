//! Analog input abstraction

/// Single analog channel
///
/// Returns raw conversion counts; the full-scale value depends on the
/// converter (4095 for a 12-bit ADC).
pub trait AnalogInput {
    /// Read error type
    type Error;

    /// Take one conversion
    fn read(&mut self) -> Result<u16, Self::Error>;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    type Error = T::Error;

    fn read(&mut self) -> Result<u16, Self::Error> {
        T::read(self)
    }
}
