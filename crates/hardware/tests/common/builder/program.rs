//! Program images for fetch tests.
//!
//! A [`Program`] lays instructions out as little-endian half-words starting
//! at an arbitrary 2-byte aligned PC and remembers, for every instruction,
//! the record the fetch unit is expected to deliver for it.

use super::compressed;

/// One instruction of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoded {
    /// A 32-bit instruction.
    Full(u32),
    /// A 16-bit instruction and the 32-bit form it must expand to.
    Compressed { half: u16, expanded: u32 },
}

/// Delivery expected for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expected {
    pub pc: u64,
    pub inst: u32,
    pub compressed: bool,
}

#[derive(Debug, Clone)]
pub struct Program {
    start_pc: u64,
    items: Vec<Encoded>,
}

impl Program {
    pub fn at(start_pc: u64) -> Self {
        assert_eq!(start_pc % 2, 0, "programs start on a half-word");
        Self {
            start_pc,
            items: Vec::new(),
        }
    }

    pub fn full(mut self, inst: u32) -> Self {
        self.items.push(Encoded::Full(inst));
        self
    }

    pub fn compressed(mut self, half: u16, expanded: u32) -> Self {
        self.items.push(Encoded::Compressed { half, expanded });
        self
    }

    pub fn push(&mut self, item: Encoded) {
        self.items.push(item);
    }

    pub fn start_pc(&self) -> u64 {
        self.start_pc
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Address of the instruction at `index`.
    pub fn pc_of(&self, index: usize) -> u64 {
        self.expected()[index].pc
    }

    /// Block-aligned base address and the half-words from there on.
    ///
    /// The image is padded with C.NOP before an unaligned start and after an
    /// odd tail, so it always covers whole 4-byte blocks.
    pub fn image(&self) -> (u64, Vec<u16>) {
        let base = self.start_pc & !3;
        let mut halves = Vec::new();
        if self.start_pc & 2 != 0 {
            halves.push(compressed::nop());
        }
        for item in &self.items {
            match *item {
                Encoded::Full(inst) => {
                    halves.push(inst as u16);
                    halves.push((inst >> 16) as u16);
                }
                Encoded::Compressed { half, .. } => halves.push(half),
            }
        }
        if halves.len() % 2 != 0 {
            halves.push(compressed::nop());
        }
        (base, halves)
    }

    /// Records the fetch unit must deliver, in program order.
    pub fn expected(&self) -> Vec<Expected> {
        let mut pc = self.start_pc;
        self.items
            .iter()
            .map(|item| {
                let (inst, compressed, size) = match *item {
                    Encoded::Full(inst) => (inst, false, 4),
                    Encoded::Compressed { expanded, .. } => (expanded, true, 2),
                };
                let record = Expected {
                    pc,
                    inst,
                    compressed,
                };
                pc += size;
                record
            })
            .collect()
    }
}
