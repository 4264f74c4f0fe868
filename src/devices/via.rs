//! 6522-style versatile interface adapter.
//!
//! The VIA sits at 0x6000-0x6FFF and bridges the CPU to the LCD and the
//! keyboard. Port B carries the LCD data lane, port A the control lane;
//! each port is masked by its data direction register before reaching
//! the LCD, so only pins configured as outputs drive the peripheral.
//!
//! ## Register Map (offsets from 0x6000)
//!
//! | Offset | Register | Access | Description |
//! |--------|----------|--------|-------------|
//! | 0x000  | PORTB    | R/W    | Port B data |
//! | 0x001  | PORTA    | R/W    | Port A data |
//! | 0x002  | DDRB     | W      | Port B data direction |
//! | 0x003  | DDRA     | W      | Port A data direction |
//! | 0x00C  | IFR      | W      | Interrupt flag register |
//! | 0x00D  | IER      | W      | Interrupt enable register |
//! | 0x0FE  | RANDOM   | R      | Entropy byte (when enabled) |
//!
//! Reads from any other offset see the floating bus. Every accepted
//! write re-drives the LCD lanes and notifies the port observer, so a
//! program toggling the enable line through PORTA produces the LCD
//! write sequence a real board would see.
//!
//! Interrupts are requested by value: the VIA never calls back into the
//! CPU. [`Via6522::key_event`] returns the line to pulse and the system
//! driver applies it, which keeps the device tree cycle-free.

use crate::devices::lcd::Hd44780;
use crate::memory::FLOATING_BUS;

/// Master interrupt-enable bit of IER.
const IER_MASTER: u8 = 0x80;

/// Interrupt line the VIA is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrqLine {
    /// Maskable interrupt request.
    Irq,
    /// Non-maskable interrupt.
    Nmi,
}

/// Direction mask and data of one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortState {
    /// Data direction register: 1 bits are outputs.
    pub ddr: u8,
    /// Data register.
    pub port: u8,
}

/// Point-in-time view of the register file, for debuggers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViaSnapshot {
    /// Interrupt enable register.
    pub ier: u8,
    /// Interrupt flag register.
    pub ifr: u8,
    /// Port A state.
    pub porta: PortState,
    /// Port B state.
    pub portb: PortState,
}

/// 6522-style interface adapter owning the LCD behind its ports.
///
/// # Examples
///
/// ```
/// use sbc6502::Via6522;
///
/// let mut via = Via6522::new();
/// via.write(0x002, 0xFF); // all of port B drives out
/// via.write(0x000, 0x42);
///
/// assert_eq!(via.read(0x000), 0x42);
/// assert_eq!(via.port_b().ddr, 0xFF);
/// ```
pub struct Via6522 {
    ier: u8,
    ifr: u8,
    ddra: u8,
    ddrb: u8,
    porta: u8,
    portb: u8,

    routing: IrqLine,
    random_enabled: bool,

    lcd: Option<Hd44780>,

    on_port_change: Option<Box<dyn FnMut(PortState, PortState)>>,
}

impl Via6522 {
    /// Creates a VIA with the master interrupt enable set, IRQ routing,
    /// the entropy register enabled and an LCD attached.
    pub fn new() -> Self {
        Self {
            ier: IER_MASTER,
            ifr: 0x00,
            ddra: 0x00,
            ddrb: 0x00,
            porta: 0x00,
            portb: 0x00,
            routing: IrqLine::Irq,
            random_enabled: true,
            lcd: Some(Hd44780::new()),
            on_port_change: None,
        }
    }

    /// Resets the peripherals behind the VIA. The register file itself
    /// is not cleared; firmware is expected to program the DDRs.
    pub fn reset(&mut self) {
        if let Some(lcd) = &mut self.lcd {
            lcd.reset();
        }
    }

    /// Register read at the given offset from the device base.
    ///
    /// Only the ports and the entropy register are readable; everything
    /// else sees the floating bus.
    pub fn read(&self, offset: u16) -> u8 {
        if self.random_enabled && offset == 0x0FE {
            return rand::random::<u8>();
        }
        match offset {
            0x000 => self.portb,
            0x001 => self.porta,
            _ => FLOATING_BUS,
        }
    }

    /// Register write at the given offset from the device base.
    ///
    /// After the register file is updated the LCD lanes are re-driven
    /// with the DDR-masked port values and the port observer (if any)
    /// is notified. This happens for *every* write into the VIA range,
    /// matched offset or not, which is what makes enable-line pulses
    /// through PORTA reach the LCD.
    pub fn write(&mut self, offset: u16, data: u8) {
        match offset {
            0x000 => self.portb = data,
            0x001 => self.porta = data,
            0x002 => self.ddrb = data,
            0x003 => self.ddra = data,
            0x00C => self.ifr = data,
            0x00D => self.ier = data,
            _ => {}
        }

        if let Some(lcd) = &mut self.lcd {
            lcd.write(self.portb & self.ddrb, self.porta & self.ddra);
        }

        let (portb, porta) = (self.port_b(), self.port_a());
        if let Some(observer) = &mut self.on_port_change {
            observer(portb, porta);
        }
    }

    /// A key was pressed: latches the scan code on port B and requests
    /// an interrupt if the master enable allows it.
    ///
    /// The caller applies the returned line to the CPU.
    #[must_use]
    pub fn key_event(&mut self, code: u8) -> Option<IrqLine> {
        self.portb = code;
        self.dispatch_irq()
    }

    /// Returns the interrupt line to pulse, if the master enable bit of
    /// IER is set.
    pub fn dispatch_irq(&self) -> Option<IrqLine> {
        if self.ier & IER_MASTER != 0 {
            Some(self.routing)
        } else {
            None
        }
    }

    /// Wires the interrupt output to IRQ or NMI. The two are mutually
    /// exclusive by construction.
    pub fn set_irq_routing(&mut self, line: IrqLine) {
        self.routing = line;
    }

    /// Current interrupt routing.
    pub fn irq_routing(&self) -> IrqLine {
        self.routing
    }

    /// Enables or disables the entropy register at offset 0x0FE.
    pub fn set_random_enabled(&mut self, enabled: bool) {
        self.random_enabled = enabled;
    }

    /// Whether the entropy register is enabled.
    pub fn random_enabled(&self) -> bool {
        self.random_enabled
    }

    /// Detaches the LCD and returns it, if one was attached.
    pub fn detach_lcd(&mut self) -> Option<Hd44780> {
        self.lcd.take()
    }

    /// Attaches (or replaces) the LCD behind the ports.
    pub fn attach_lcd(&mut self, lcd: Hd44780) {
        self.lcd = Some(lcd);
    }

    /// The LCD behind the ports, if attached.
    pub fn lcd(&self) -> Option<&Hd44780> {
        self.lcd.as_ref()
    }

    /// Exclusive access to the attached LCD.
    pub fn lcd_mut(&mut self) -> Option<&mut Hd44780> {
        self.lcd.as_mut()
    }

    /// Registers the observer called with both port states after every
    /// register write.
    pub fn set_port_callback<F>(&mut self, callback: F)
    where
        F: FnMut(PortState, PortState) + 'static,
    {
        self.on_port_change = Some(Box::new(callback));
    }

    /// Port A direction mask and data.
    pub fn port_a(&self) -> PortState {
        PortState {
            ddr: self.ddra,
            port: self.porta,
        }
    }

    /// Port B direction mask and data.
    pub fn port_b(&self) -> PortState {
        PortState {
            ddr: self.ddrb,
            port: self.portb,
        }
    }

    /// Point-in-time view of the register file.
    pub fn snapshot(&self) -> ViaSnapshot {
        ViaSnapshot {
            ier: self.ier,
            ifr: self.ifr,
            porta: self.port_a(),
            portb: self.port_b(),
        }
    }
}

impl Default for Via6522 {
    fn default() -> Self {
        Self::new()
    }
}
