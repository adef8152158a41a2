use crate::domain::model::SerialNumber;
use crate::utils::error::Result;

/// Something that can report the serial number of the machine we are running on.
pub trait SerialSource {
    fn name(&self) -> &'static str;
    fn serial_number(&self) -> Result<SerialNumber>;
}

impl<S: SerialSource + ?Sized> SerialSource for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn serial_number(&self) -> Result<SerialNumber> {
        (**self).serial_number()
    }
}
