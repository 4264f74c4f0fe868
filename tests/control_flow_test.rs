//! Tests for the control-flow instructions: JMP, JSR/RTS and the
//! flag-manipulation group.

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
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x4C); // JMP $9000
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x90);

    let start = cpu.clock_count();
    cpu.step_instruction();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.clock_count() - start, 3);
}

#[test]
fn test_jsr_pushes_return_address_minus_one() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x20); // JSR $9000
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x90);

    let start = cpu.clock_count();
    cpu.step_instruction();

    assert_eq!(cpu.pc(), 0x9000);
    // The address of the JSR's last byte goes on the stack, high first.
    assert_eq!(cpu.memory().read(0x01FF), 0x80);
    assert_eq!(cpu.memory().read(0x01FE), 0x02);
    assert_eq!(cpu.stkp(), 0xFD);
    assert_eq!(cpu.clock_count() - start, 6);
}

#[test]
fn test_rts_resumes_after_the_call() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x20); // JSR $9000
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x90);
    cpu.memory_mut().write(0x8003, 0xA9); // LDA #$01
    cpu.memory_mut().write(0x8004, 0x01);
    cpu.memory_mut().write(0x9000, 0x60); // RTS

    cpu.step_instruction(); // JSR

    let start = cpu.clock_count();
    cpu.step_instruction(); // RTS
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.stkp(), 0xFF);
    assert_eq!(cpu.clock_count() - start, 6);

    cpu.step_instruction(); // LDA runs where the call left off
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_flag_set_and_clear_instructions() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x38); // SEC
    cpu.memory_mut().write(0x8001, 0x18); // CLC
    cpu.memory_mut().write(0x8002, 0xF8); // SED
    cpu.memory_mut().write(0x8003, 0xD8); // CLD
    cpu.memory_mut().write(0x8004, 0x78); // SEI
    cpu.memory_mut().write(0x8005, 0x58); // CLI
    cpu.memory_mut().write(0x8006, 0xB8); // CLV

    cpu.step_instruction();
    assert!(cpu.get_flag(flags::C));
    cpu.step_instruction();
    assert!(!cpu.get_flag(flags::C));

    cpu.step_instruction();
    assert!(cpu.get_flag(flags::D));
    cpu.step_instruction();
    assert!(!cpu.get_flag(flags::D));

    cpu.step_instruction();
    assert!(cpu.get_flag(flags::I));
    cpu.step_instruction();
    assert!(!cpu.get_flag(flags::I));

    cpu.set_flag(flags::V, true);
    cpu.step_instruction();
    assert!(!cpu.get_flag(flags::V));
}

#[test]
fn test_bit_sets_flags_from_memory() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x24); // BIT $10
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0xC0); // bits 7 and 6 set
    cpu.set_a(0x0F);

    cpu.step_instruction();

    assert!(cpu.get_flag(flags::Z)); // 0x0F & 0xC0 == 0
    assert!(cpu.get_flag(flags::N)); // bit 7 of memory
    assert!(cpu.get_flag(flags::V)); // bit 6 of memory
    assert_eq!(cpu.a(), 0x0F); // A untouched
}
