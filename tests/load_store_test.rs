//! Tests for loads, stores, register transfers, increments/decrements
//! and the bitwise logic group.

use sbc6502::{flags, MemoryBus, Ram, CPU};

/// Helper function to create a CPU with reset vector at 0x8000.
fn setup_cpu() -> CPU<Ram> {
    let mut memory = Ram::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = CPU::new(memory);
    for _ in 0..7 {
        cpu.step();
    }
    cpu
}

#[test]
fn test_lda_sets_zero_and_negative() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xA9); // LDA #$00
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0xA9); // LDA #$80
    cpu.memory_mut().write(0x8003, 0x80);

    cpu.step_instruction();
    assert!(cpu.get_flag(flags::Z));
    assert!(!cpu.get_flag(flags::N));

    cpu.step_instruction();
    assert!(!cpu.get_flag(flags::Z));
    assert!(cpu.get_flag(flags::N));
    assert_eq!(cpu.a(), 0x80);
}

#[test]
fn test_ldx_ldy_and_stores() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xA2); // LDX #$11
    cpu.memory_mut().write(0x8001, 0x11);
    cpu.memory_mut().write(0x8002, 0xA0); // LDY #$22
    cpu.memory_mut().write(0x8003, 0x22);
    cpu.memory_mut().write(0x8004, 0x86); // STX $40
    cpu.memory_mut().write(0x8005, 0x40);
    cpu.memory_mut().write(0x8006, 0x84); // STY $41
    cpu.memory_mut().write(0x8007, 0x41);

    for _ in 0..4 {
        cpu.step_instruction();
    }

    assert_eq!(cpu.memory().read(0x0040), 0x11);
    assert_eq!(cpu.memory().read(0x0041), 0x22);
}

#[test]
fn test_sta_does_not_touch_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x85); // STA $30
    cpu.memory_mut().write(0x8001, 0x30);
    cpu.set_a(0x00);
    let status_before = cpu.status();

    cpu.step_instruction();

    assert_eq!(cpu.memory().read(0x0030), 0x00);
    // Store leaves the flags exactly as they were (U aside, forced by
    // the fetch).
    assert_eq!(cpu.status() | flags::U, status_before | flags::U);
}

#[test]
fn test_transfers_copy_and_set_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xAA); // TAX
    cpu.memory_mut().write(0x8001, 0xA8); // TAY
    cpu.memory_mut().write(0x8002, 0x8A); // TXA
    cpu.memory_mut().write(0x8003, 0x98); // TYA
    cpu.set_a(0x80);

    cpu.step_instruction(); // TAX
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.get_flag(flags::N));

    cpu.step_instruction(); // TAY
    assert_eq!(cpu.y(), 0x80);

    cpu.set_a(0x00);
    cpu.step_instruction(); // TXA
    assert_eq!(cpu.a(), 0x80);

    cpu.set_y(0x00);
    cpu.step_instruction(); // TYA
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.get_flag(flags::Z));
}

#[test]
fn test_txs_writes_stack_pointer_without_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x9A); // TXS
    cpu.memory_mut().write(0x8001, 0xBA); // TSX
    cpu.set_x(0x00);
    cpu.set_flag(flags::Z, false);

    cpu.step_instruction(); // TXS
    assert_eq!(cpu.stkp(), 0x00);
    assert!(!cpu.get_flag(flags::Z)); // TXS never touches flags

    cpu.set_x(0x55);
    cpu.step_instruction(); // TSX
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.get_flag(flags::Z)); // TSX does
}

#[test]
fn test_inc_dec_memory() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xE6); // INC $10
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x8002, 0xC6); // DEC $11
    cpu.memory_mut().write(0x8003, 0x11);
    cpu.memory_mut().write(0x0010, 0xFF);
    cpu.memory_mut().write(0x0011, 0x01);

    cpu.step_instruction();
    assert_eq!(cpu.memory().read(0x0010), 0x00); // wraps
    assert!(cpu.get_flag(flags::Z));

    cpu.step_instruction();
    assert_eq!(cpu.memory().read(0x0011), 0x00);
    assert!(cpu.get_flag(flags::Z));
}

#[test]
fn test_register_inc_dec() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xE8); // INX
    cpu.memory_mut().write(0x8001, 0xC8); // INY
    cpu.memory_mut().write(0x8002, 0xCA); // DEX
    cpu.memory_mut().write(0x8003, 0x88); // DEY
    cpu.set_x(0xFF);
    cpu.set_y(0x00);

    cpu.step_instruction(); // INX wraps to 0
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.get_flag(flags::Z));

    cpu.step_instruction(); // INY
    assert_eq!(cpu.y(), 0x01);

    cpu.step_instruction(); // DEX wraps to 0xFF
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.get_flag(flags::N));

    cpu.step_instruction(); // DEY
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.get_flag(flags::Z));
}

#[test]
fn test_and_ora_eor() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x29); // AND #$0F
    cpu.memory_mut().write(0x8001, 0x0F);
    cpu.memory_mut().write(0x8002, 0x09); // ORA #$80
    cpu.memory_mut().write(0x8003, 0x80);
    cpu.memory_mut().write(0x8004, 0x49); // EOR #$FF
    cpu.memory_mut().write(0x8005, 0xFF);
    cpu.set_a(0x3C);

    cpu.step_instruction();
    assert_eq!(cpu.a(), 0x0C);

    cpu.step_instruction();
    assert_eq!(cpu.a(), 0x8C);
    assert!(cpu.get_flag(flags::N));

    cpu.step_instruction();
    assert_eq!(cpu.a(), 0x73);
    assert!(!cpu.get_flag(flags::N));
}
