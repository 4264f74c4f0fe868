//! Tests for addressing-mode arithmetic: zero-page wraparound, the
//! indirect-JMP page-boundary defect and page-crossing cycle charges
//! for the indexed modes.

use sbc6502::{MemoryBus, Ram, CPU};

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
fn test_zero_page_x_wraps_within_page_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xB5); // LDA $FF,X
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x0000, 0x42); // 0xFF + 1 wraps to 0x00
    cpu.memory_mut().write(0x0100, 0x99); // must NOT be read
    cpu.set_x(0x01);

    cpu.step_instruction();

    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_zero_page_y_wraps_within_page_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xB6); // LDX $F0,Y
    cpu.memory_mut().write(0x8001, 0xF0);
    cpu.memory_mut().write(0x0010, 0x24); // 0xF0 + 0x20 wraps to 0x10
    cpu.set_y(0x20);

    cpu.step_instruction();

    assert_eq!(cpu.x(), 0x24);
}

#[test]
fn test_indirect_jmp_page_boundary_defect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x6C); // JMP ($30FF)
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x30);
    cpu.memory_mut().write(0x30FF, 0x80); // low byte of target
    cpu.memory_mut().write(0x3000, 0x40); // high byte comes from SAME page
    cpu.memory_mut().write(0x3100, 0x99); // correct location, never read

    cpu.step_instruction();

    assert_eq!(cpu.pc(), 0x4080);
}

#[test]
fn test_indirect_jmp_normal_case() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x6C); // JMP ($3010)
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x8002, 0x30);
    cpu.memory_mut().write(0x3010, 0x34);
    cpu.memory_mut().write(0x3011, 0x12);

    cpu.step_instruction();

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_indexed_indirect_wraps_pointer_in_page_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xA1); // LDA ($FE,X) with X = 1
    cpu.memory_mut().write(0x8001, 0xFE);
    cpu.memory_mut().write(0x00FF, 0x00); // pointer low at 0xFF
    cpu.memory_mut().write(0x0000, 0x20); // pointer high wraps to 0x00
    cpu.memory_mut().write(0x2000, 0x55);
    cpu.set_x(0x01);

    cpu.step_instruction();

    assert_eq!(cpu.a(), 0x55);
}

#[test]
fn test_absolute_y_page_cross_extra_cycle() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xB9); // LDA $20FF,Y
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2100, 0x77);
    cpu.set_y(0x01);

    let start = cpu.clock_count();
    cpu.step_instruction();

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(cpu.clock_count() - start, 5); // 4 + 1
}

#[test]
fn test_indirect_indexed_page_cross_extra_cycle() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xB1); // LDA ($10),Y
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0xFF); // pointer = 0x20FF
    cpu.memory_mut().write(0x0011, 0x20);
    cpu.memory_mut().write(0x2100, 0x33); // + Y crosses into 0x2100
    cpu.set_y(0x01);

    let start = cpu.clock_count();
    cpu.step_instruction();

    assert_eq!(cpu.a(), 0x33);
    assert_eq!(cpu.clock_count() - start, 6); // 5 + 1
}

#[test]
fn test_store_never_pays_the_page_cross_cycle() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x9D); // STA $20FF,X
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.set_a(0x42);
    cpu.set_x(0x01);

    let start = cpu.clock_count();
    cpu.step_instruction();

    assert_eq!(cpu.memory().read(0x2100), 0x42);
    // The mode reports the crossing but STA is not eligible.
    assert_eq!(cpu.clock_count() - start, 5);
}

#[test]
fn test_immediate_consumes_operand_byte() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xA0); // LDY #$7F
    cpu.memory_mut().write(0x8001, 0x7F);

    cpu.step_instruction();

    assert_eq!(cpu.y(), 0x7F);
    assert_eq!(cpu.pc(), 0x8002);
}
