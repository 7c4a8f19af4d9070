use embedded_hal::digital::OutputPin;

/// The gpio driver is a wrapper for the embedded-hal digital output pin trait.
/// It wraps the low-active and high-active pins, and provides a way to set the pin state
pub(crate) struct OutputController<P: OutputPin> {
    pin: P,
    low_active: bool,
}

impl<P: OutputPin> OutputController<P> {
    /// Create a new OutputController instance
    pub fn new(pin: P, low_active: bool) -> Self {
        Self { pin, low_active }
    }

    /// Activate the GPIO pin
    pub fn activate(&mut self) {
        if self.low_active {
            self.pin.set_low().ok();
        } else {
            self.pin.set_high().ok();
        }
    }

    /// Deactivate the GPIO pin
    pub fn deactivate(&mut self) {
        if self.low_active {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
    }

    pub fn set_active(&mut self, active: bool) {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
    }
}

#[cfg(test)]
mod test {
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    use super::OutputController;

    #[test]
    fn test_low_active_pin() {
        let expectations = [Transaction::set(State::Low), Transaction::set(State::High)];
        let mut pin = PinMock::new(&expectations);
        let mut controller = OutputController::new(pin.clone(), true);
        controller.set_active(true);
        controller.set_active(false);
        pin.done();
    }

    #[test]
    fn test_high_active_pin() {
        let expectations = [Transaction::set(State::High), Transaction::set(State::Low)];
        let mut pin = PinMock::new(&expectations);
        let mut controller = OutputController::new(pin.clone(), false);
        controller.activate();
        controller.deactivate();
        pin.done();
    }
}
