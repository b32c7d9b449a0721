//! PPC register definitions.

/// PPC general-purpose registers.
///
/// r1 is the stack pointer by ABI convention; r30 commonly holds the PIC
/// base in position-independent code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Gpr {
    R0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7,
    R8 = 8,
    R9 = 9,
    R10 = 10,
    R11 = 11,
    R12 = 12,
    R13 = 13,
    R14 = 14,
    R15 = 15,
    R16 = 16,
    R17 = 17,
    R18 = 18,
    R19 = 19,
    R20 = 20,
    R21 = 21,
    R22 = 22,
    R23 = 23,
    R24 = 24,
    R25 = 25,
    R26 = 26,
    R27 = 27,
    R28 = 28,
    R29 = 29,
    R30 = 30,
    R31 = 31,
}

impl Gpr {
    /// Register id as carried by machine and MC operands.
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Assembly display name.
    pub fn name(self) -> &'static str {
        match self {
            Gpr::R0 => "r0",
            Gpr::R1 => "r1",
            Gpr::R2 => "r2",
            Gpr::R3 => "r3",
            Gpr::R4 => "r4",
            Gpr::R5 => "r5",
            Gpr::R6 => "r6",
            Gpr::R7 => "r7",
            Gpr::R8 => "r8",
            Gpr::R9 => "r9",
            Gpr::R10 => "r10",
            Gpr::R11 => "r11",
            Gpr::R12 => "r12",
            Gpr::R13 => "r13",
            Gpr::R14 => "r14",
            Gpr::R15 => "r15",
            Gpr::R16 => "r16",
            Gpr::R17 => "r17",
            Gpr::R18 => "r18",
            Gpr::R19 => "r19",
            Gpr::R20 => "r20",
            Gpr::R21 => "r21",
            Gpr::R22 => "r22",
            Gpr::R23 => "r23",
            Gpr::R24 => "r24",
            Gpr::R25 => "r25",
            Gpr::R26 => "r26",
            Gpr::R27 => "r27",
            Gpr::R28 => "r28",
            Gpr::R29 => "r29",
            Gpr::R30 => "r30",
            Gpr::R31 => "r31",
        }
    }
}
