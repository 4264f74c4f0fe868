//! HD44780-class character LCD controller.
//!
//! The controller is driven through two 8-bit lanes coming from the VIA:
//! a data byte (port B) and a control byte (port A) carrying the RS, R/W
//! and E lines. Writes latch both into the instruction and data
//! registers; a write is only *accepted* on an enable pulse with R/W low
//! while the controller is not busy.
//!
//! Display storage is an 80-slot DDRAM addressed by the address counter
//! (AC). The two visible 40-character lines are windows over that store,
//! anchored by per-line offsets so that display-shift instructions move
//! the window rather than the data.

/// Control lane bit masks (port A wiring).
mod control {
    /// Register select: 0 = instruction, 1 = data.
    pub const RS: u8 = 0x20;
    /// Read/write: writes are only accepted while low.
    pub const RW: u8 = 0x40;
    /// Enable pulse.
    pub const E: u8 = 0x80;
}

/// Number of DDRAM character slots.
const DDRAM_SIZE: usize = 80;

/// Characters per visible line.
const LINE_WIDTH: usize = 40;

/// Character generator ROM, indexed `[low nibble][high nibble]` of the
/// character code. Columns 2-7 carry the printable ASCII range; the
/// unpopulated columns render as '?'.
#[rustfmt::skip]
const CGROM: [[char; 16]; 16] = [
    ['?', '?', ' ',  '0', '@', 'P',  '`', 'p', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '!',  '1', 'A', 'Q',  'a', 'q', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '"',  '2', 'B', 'R',  'b', 'r', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '#',  '3', 'C', 'S',  'c', 's', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '$',  '4', 'D', 'T',  'd', 't', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '%',  '5', 'E', 'U',  'e', 'u', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '&',  '6', 'F', 'V',  'f', 'v', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '\'', '7', 'G', 'W',  'g', 'w', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '(',  '8', 'H', 'X',  'h', 'x', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', ')',  '9', 'I', 'Y',  'i', 'y', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '*',  ':', 'J', 'Z',  'j', 'z', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '+',  ';', 'K', '[',  'k', '(', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', ',',  '<', 'L', '\\', 'l', '|', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '-',  '=', 'M', ']',  'm', ')', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '.',  '>', 'N', '^',  'n', '>', '?', '?', '?', '-', '?', '?', '?', '?'],
    ['?', '?', '/',  '?', 'O', '_',  'o', '<', '?', '?', '?', '-', '?', '?', '?', '?'],
];

/// Output surface for the LCD.
///
/// The controller pushes the rendered lines out whenever the display
/// content or window changes; a terminal, a GUI widget or a test
/// recorder can sit on the other end.
pub trait Screen {
    /// Receives the two visible 40-character lines.
    fn fill_text(&mut self, line1: &[char], line2: &[char]);

    /// Display on/off control reached the controller.
    fn turn_on_off(&mut self, on: bool);
}

/// Point-in-time view of the controller internals, for debuggers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdSnapshot {
    /// Cursor position within DDRAM.
    pub cursor: i16,
    /// Address counter.
    pub address: u8,
    /// First-line window anchor.
    pub offset1: i16,
    /// Second-line window anchor.
    pub offset2: i16,
    /// Busy flag.
    pub busy: bool,
}

/// HD44780-class LCD controller state machine.
///
/// # Examples
///
/// ```
/// use sbc6502::Hd44780;
///
/// let mut lcd = Hd44780::new();
/// // Display on (RS=0, RW=0, E=1), then write 'H' (0x48) as data.
/// lcd.write(0x0C, 0x80);
/// lcd.write(0x48, 0xA0);
///
/// assert_eq!(lcd.line1()[0], 'H');
/// assert_eq!(lcd.address_counter(), 1);
/// ```
pub struct Hd44780 {
    /// Instruction register: last control byte latched.
    ir: u8,
    /// Data register: last data byte latched.
    dr: u8,
    /// Busy flag; asserted for the duration of every accepted write.
    busy: bool,

    /// Address counter, always wrap-corrected into 0..80.
    ac: u8,

    /// Entry mode: increment (true) or decrement AC after a data write.
    increment: bool,
    /// Entry mode: shift the display window instead of the cursor.
    shift_display: bool,
    /// Display on/off.
    display_on: bool,
    /// Cursor visible.
    cursor_on: bool,

    /// Cursor position; follows AC on normal data writes, drifts under
    /// display shifts.
    cursor: i16,
    /// Window anchors for the two lines. They drift freely under shift
    /// instructions; rendering reduces them modulo the DDRAM size.
    offset1: i16,
    offset2: i16,

    ddram: [char; DDRAM_SIZE],

    screen: Option<Box<dyn Screen>>,
}

impl Hd44780 {
    /// Creates a controller in its power-on state: empty display,
    /// increment entry mode, display off, no screen attached.
    pub fn new() -> Self {
        Self {
            ir: 0x00,
            dr: 0x00,
            busy: false,
            ac: 0,
            increment: true,
            shift_display: false,
            display_on: false,
            cursor_on: false,
            cursor: 0,
            offset1: 0,
            offset2: LINE_WIDTH as i16,
            ddram: [' '; DDRAM_SIZE],
            screen: None,
        }
    }

    /// Attaches the output surface notified on display changes.
    pub fn attach_screen(&mut self, screen: Box<dyn Screen>) {
        self.screen = Some(screen);
    }

    /// Re-initializes the controller, as the internal reset circuit does
    /// at power-on. Clears DDRAM, homes the cursor and windows, and
    /// drops every mode flag (including entry-mode increment).
    pub fn reset(&mut self) {
        self.dr = 0x00;
        self.busy = true;
        self.clear_display();
        self.return_home();
        self.display_on = false;
        self.cursor_on = false;
        self.increment = false;
        self.shift_display = false;
        self.busy = false;
        self.ac = 0;
        self.cursor = 0;
        self.offset1 = 0;
        self.offset2 = LINE_WIDTH as i16;
    }

    /// Bus write: `data` is the byte on the data lane, `control` carries
    /// RS, R/W and E.
    ///
    /// Both latches always capture the lanes. The write is acted on only
    /// when R/W is low, E is high and the controller is not busy; the
    /// busy flag is held for the duration of the operation, instruction
    /// and data alike.
    pub fn write(&mut self, data: u8, control: u8) {
        self.ir = control;
        self.dr = data;

        if control & self::control::RW != 0
            || control & self::control::E == 0
            || self.busy
        {
            return;
        }

        self.busy = true;
        if control & self::control::RS == 0 {
            self.decode_instruction();
        } else {
            self.write_data();
        }
        self.busy = false;
    }

    /// Bus read: busy flag on bit 7, address counter on the low bits.
    pub fn read(&self) -> u8 {
        (u8::from(self.busy) << 7) | (self.ac & 0x7F)
    }

    /// Point-in-time view of the controller internals.
    pub fn snapshot(&self) -> LcdSnapshot {
        LcdSnapshot {
            cursor: self.cursor,
            address: self.ac,
            offset1: self.offset1,
            offset2: self.offset2,
            busy: self.busy,
        }
    }

    /// Address counter.
    pub fn address_counter(&self) -> u8 {
        self.ac
    }

    /// Cursor position, or -10 while the cursor is switched off (an
    /// off-screen sentinel for renderers).
    pub fn cursor_pos(&self) -> i16 {
        if self.cursor_on {
            self.cursor
        } else {
            -10
        }
    }

    /// The visible first line: a 40-character window over DDRAM anchored
    /// at `offset1` (modulo the store size).
    pub fn line1(&self) -> Vec<char> {
        self.window(self.offset1)
    }

    /// The visible second line, anchored at `offset2`.
    pub fn line2(&self) -> Vec<char> {
        self.window(self.offset2)
    }

    fn window(&self, anchor: i16) -> Vec<char> {
        (0..LINE_WIDTH)
            .map(|i| {
                let idx = (anchor + i as i16).rem_euclid(DDRAM_SIZE as i16);
                self.ddram[idx as usize]
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Instruction path (RS = 0)

    /// Decodes the instruction in DR. The instruction set is prefix
    /// coded: the highest set bit selects the operation and the bits
    /// below it carry the parameters.
    fn decode_instruction(&mut self) {
        let d = self.dr;
        if d == 0x01 {
            self.clear_display();
        } else if d & 0xFE == 0x02 {
            self.return_home();
        } else if d & 0xFC == 0x04 {
            self.entry_mode_set();
        } else if d & 0xF8 == 0x08 {
            self.display_control();
        } else if d & 0xF0 == 0x10 {
            self.cursor_display_shift();
        } else if d & 0xE0 == 0x20 {
            self.function_set();
        } else if d & 0xC0 == 0x40 {
            self.set_cgram_address();
        }
    }

    /// Clear display: blanks DDRAM and zeroes the address counter.
    fn clear_display(&mut self) {
        self.ddram = [' '; DDRAM_SIZE];
        self.ac = 0;
    }

    /// Return home: AC to 0, cursor to 0, windows back to their original
    /// anchors. DDRAM contents are untouched.
    fn return_home(&mut self) {
        self.ac = 0;
        self.cursor = 0;
        self.offset1 = 0;
        self.offset2 = LINE_WIDTH as i16;
    }

    /// Entry mode set: DB1 selects increment/decrement, DB0 selects
    /// display shift on data writes.
    fn entry_mode_set(&mut self) {
        self.shift_display = self.dr & 0x01 != 0;
        self.increment = self.dr & 0x02 != 0;
    }

    /// Display on/off control: DB2 drives the display, DB1 the cursor.
    /// Cursor blink (DB0) is not modeled.
    fn display_control(&mut self) {
        self.cursor_on = self.dr & 0x02 != 0;
        let on = self.dr & 0x04 != 0;
        self.display_on = on;
        if let Some(screen) = &mut self.screen {
            screen.turn_on_off(on);
        }
    }

    /// Cursor or display shift: moves the cursor (S/C = 0) or the whole
    /// display window (S/C = 1) left or right without touching DDRAM.
    fn cursor_display_shift(&mut self) {
        let right = self.dr & 0x04 != 0;
        let display = self.dr & 0x08 != 0;

        match (display, right) {
            (false, false) => {
                self.cursor -= 1;
                self.ac = self.ac.checked_sub(1).unwrap_or(DDRAM_SIZE as u8 - 1);
            }
            (false, true) => {
                self.cursor += 1;
                self.ac += 1;
            }
            (true, false) => {
                self.offset1 -= 1;
                self.offset2 -= 1;
                self.cursor += 1;
            }
            (true, true) => {
                self.offset1 += 1;
                self.offset2 += 1;
                self.cursor -= 1;
            }
        }

        self.wrap_address_counter();
        self.refresh_screen();
    }

    /// Function set (interface width, line count, font). Accepted but
    /// not modeled; the emulated display is fixed at 8-bit, two lines.
    fn function_set(&mut self) {}

    /// Set CGRAM address. User-defined glyphs are not modeled; the
    /// instruction is accepted so firmware init sequences run cleanly.
    fn set_cgram_address(&mut self) {}

    // ------------------------------------------------------------------
    // Data path (RS = 1)

    /// Stores a character: looks the code up in CGROM, writes it at AC
    /// and advances AC per the entry mode. With display shift enabled
    /// the windows follow instead of the cursor.
    fn write_data(&mut self) {
        if !self.display_on {
            return;
        }

        let hi = (self.dr >> 4) & 0x0F;
        let lo = self.dr & 0x0F;
        self.ddram[self.ac as usize] = CGROM[lo as usize][hi as usize];

        let dir: i16 = if self.increment { 1 } else { -1 };
        if dir == 1 {
            self.ac += 1;
        } else {
            self.ac = self.ac.checked_sub(1).unwrap_or(DDRAM_SIZE as u8 - 1);
        }

        if self.shift_display {
            self.offset1 += dir;
            self.offset2 += dir;
        } else {
            self.cursor = self.ac as i16;
        }

        self.wrap_address_counter();
        self.refresh_screen();
    }

    /// Keeps the address counter inside 0..80. Overflowing off the end
    /// of DDRAM resets the cursor and both window anchors as well.
    fn wrap_address_counter(&mut self) {
        if self.ac as usize >= DDRAM_SIZE {
            self.ac = 0;
            self.offset1 = 0;
            self.offset2 = 0;
            self.cursor = 0;
        }
    }

    fn refresh_screen(&mut self) {
        let line1 = self.window(self.offset1);
        let line2 = self.window(self.offset2);
        if let Some(screen) = &mut self.screen {
            screen.fill_text(&line1, &line2);
        }
    }
}

impl Default for Hd44780 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const E: u8 = 0x80;
    const RS_E: u8 = 0xA0;

    fn lcd_with_display_on() -> Hd44780 {
        let mut lcd = Hd44780::new();
        lcd.write(0x0C, E); // display on
        lcd.write(0x06, E); // entry mode: increment, no shift
        lcd
    }

    #[test]
    fn test_write_rejected_without_enable() {
        let mut lcd = lcd_with_display_on();
        lcd.write(0x48, 0x20); // RS set but E low
        assert_eq!(lcd.line1()[0], ' ');
        assert_eq!(lcd.address_counter(), 0);
    }

    #[test]
    fn test_write_rejected_with_rw_high() {
        let mut lcd = lcd_with_display_on();
        lcd.write(0x48, 0xE0); // RS, RW and E all high
        assert_eq!(lcd.line1()[0], ' ');
    }

    #[test]
    fn test_data_write_stores_glyph_and_advances() {
        let mut lcd = lcd_with_display_on();
        lcd.write(0x48, RS_E); // 'H'
        lcd.write(0x69, RS_E); // 'i'

        assert_eq!(lcd.line1()[0], 'H');
        assert_eq!(lcd.line1()[1], 'i');
        assert_eq!(lcd.address_counter(), 2);
    }

    #[test]
    fn test_data_write_ignored_while_display_off() {
        let mut lcd = Hd44780::new();
        lcd.write(0x48, RS_E);
        assert_eq!(lcd.address_counter(), 0);
        assert_eq!(lcd.line1()[0], ' ');
    }

    #[test]
    fn test_clear_display() {
        let mut lcd = lcd_with_display_on();
        lcd.write(0x48, RS_E);
        lcd.write(0x01, E);

        assert_eq!(lcd.line1(), vec![' '; 40]);
        assert_eq!(lcd.address_counter(), 0);
    }

    #[test]
    fn test_return_home_restores_windows() {
        let mut lcd = lcd_with_display_on();
        lcd.write(0x1C, E); // shift display right
        assert_eq!(lcd.snapshot().offset1, 1);

        lcd.write(0x02, E);
        let snap = lcd.snapshot();
        assert_eq!(snap.address, 0);
        assert_eq!(snap.offset1, 0);
        assert_eq!(snap.offset2, 40);
    }

    #[test]
    fn test_decrement_entry_mode_wraps_to_end() {
        let mut lcd = lcd_with_display_on();
        lcd.write(0x04, E); // entry mode: decrement
        lcd.write(0x41, RS_E); // 'A' at slot 0, then AC wraps backwards

        assert_eq!(lcd.address_counter(), 79);
    }

    #[test]
    fn test_address_counter_overflow_resets_windows() {
        let mut lcd = lcd_with_display_on();
        for _ in 0..79 {
            lcd.write(0x2A, RS_E); // '*'
        }
        assert_eq!(lcd.address_counter(), 79);

        lcd.write(0x2A, RS_E);
        let snap = lcd.snapshot();
        assert_eq!(snap.address, 0);
        assert_eq!(snap.offset1, 0);
        assert_eq!(snap.offset2, 0);
        assert_eq!(snap.cursor, 0);
    }

    #[test]
    fn test_cursor_shift_left_from_zero_wraps() {
        let mut lcd = lcd_with_display_on();
        lcd.write(0x10, E); // cursor shift left
        assert_eq!(lcd.address_counter(), 79);
    }

    #[test]
    fn test_cgrom_mapping() {
        let mut lcd = lcd_with_display_on();
        for (code, glyph) in [(0x41u8, 'A'), (0x7Au8, 'z'), (0x30u8, '0'), (0x21u8, '!')] {
            lcd.write(0x01, E);
            lcd.write(code, RS_E);
            assert_eq!(lcd.line1()[0], glyph, "code {:#04x}", code);
        }
    }

    #[test]
    fn test_read_reports_busy_and_address() {
        let mut lcd = lcd_with_display_on();
        lcd.write(0x48, RS_E);
        // Busy deasserts once the write completes.
        assert_eq!(lcd.read(), 0x01);
    }

    #[derive(Default)]
    struct RecordingScreen {
        on: Rc<RefCell<bool>>,
        lines: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl Screen for RecordingScreen {
        fn fill_text(&mut self, line1: &[char], line2: &[char]) {
            self.lines
                .borrow_mut()
                .push((line1.iter().collect(), line2.iter().collect()));
        }

        fn turn_on_off(&mut self, on: bool) {
            *self.on.borrow_mut() = on;
        }
    }

    #[test]
    fn test_screen_notifications() {
        let on = Rc::new(RefCell::new(false));
        let lines = Rc::new(RefCell::new(Vec::new()));
        let mut lcd = Hd44780::new();
        lcd.attach_screen(Box::new(RecordingScreen {
            on: Rc::clone(&on),
            lines: Rc::clone(&lines),
        }));

        lcd.write(0x0C, E);
        assert!(*on.borrow());

        lcd.write(0x48, RS_E);
        let recorded = lines.borrow();
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0].0.starts_with('H'));
    }
}
