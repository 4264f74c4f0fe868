//! Tests for the stack instructions: PHA, PLA, PHP, PLP.

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
fn test_pha_pla_roundtrip() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x48); // PHA
    cpu.memory_mut().write(0x8001, 0xA9); // LDA #$00
    cpu.memory_mut().write(0x8002, 0x00);
    cpu.memory_mut().write(0x8003, 0x68); // PLA
    cpu.set_a(0x42);

    let start = cpu.clock_count();
    cpu.step_instruction(); // PHA
    assert_eq!(cpu.clock_count() - start, 3);
    assert_eq!(cpu.memory().read(0x01FF), 0x42);
    assert_eq!(cpu.stkp(), 0xFE);

    cpu.step_instruction(); // LDA #$00
    assert_eq!(cpu.a(), 0x00);

    let start = cpu.clock_count();
    cpu.step_instruction(); // PLA
    assert_eq!(cpu.clock_count() - start, 4);
    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.stkp(), 0xFF);
    assert!(!cpu.get_flag(flags::Z));
    assert!(!cpu.get_flag(flags::N));
}

#[test]
fn test_pla_sets_zero_and_negative() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x48); // PHA (0x80)
    cpu.memory_mut().write(0x8001, 0x68); // PLA
    cpu.set_a(0x80);

    cpu.step_instruction();
    cpu.set_a(0x00);
    cpu.step_instruction();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.get_flag(flags::N));
    assert!(!cpu.get_flag(flags::Z));
}

#[test]
fn test_php_pushes_with_break_and_unused_set() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x08); // PHP
    cpu.set_flag(flags::B, false);
    cpu.set_flag(flags::U, false);
    cpu.set_flag(flags::C, true);

    cpu.step_instruction();

    let pushed = cpu.memory().read(0x01FF);
    assert_ne!(pushed & flags::B, 0);
    assert_ne!(pushed & flags::U, 0);
    assert_ne!(pushed & flags::C, 0);
    // ...and both are clear in the live register afterwards.
    assert!(!cpu.get_flag(flags::B));
    assert_eq!(cpu.stkp(), 0xFE);
}

#[test]
fn test_plp_restores_status_and_forces_unused() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x08); // PHP
    cpu.memory_mut().write(0x8001, 0x28); // PLP
    cpu.set_flag(flags::C, true);
    cpu.set_flag(flags::N, true);

    cpu.step_instruction(); // PHP
    cpu.set_flag(flags::C, false);
    cpu.set_flag(flags::N, false);

    let start = cpu.clock_count();
    cpu.step_instruction(); // PLP
    assert_eq!(cpu.clock_count() - start, 4);

    assert!(cpu.get_flag(flags::C));
    assert!(cpu.get_flag(flags::N));
    assert!(cpu.get_flag(flags::U)); // forced back on by the pull
    assert_eq!(cpu.stkp(), 0xFF);
}
