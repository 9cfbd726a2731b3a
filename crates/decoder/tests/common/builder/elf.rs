//! Minimal ELF image builder.
//!
//! Produces a little-endian executable with a null section, one `.text`
//! section, and a section-name string table. No program headers are emitted;
//! the loader only reads sections.

/// `e_machine` for RISC-V.
pub const EM_RISCV: u16 = 243;
/// `e_machine` for x86-64.
pub const EM_X86_64: u16 = 62;

const ET_EXEC: u16 = 2;
const SHT_PROGBITS: u32 = 1;
const SHT_STRTAB: u32 = 3;
const SHF_ALLOC: u64 = 0x2;
const SHF_EXECINSTR: u64 = 0x4;
const SHSTRTAB: &[u8] = b"\0.text\0.shstrtab\0";
const TEXT_NAME: u32 = 1;
const SHSTRTAB_NAME: u32 = 7;

/// Fluent builder for a single-section ELF image.
#[derive(Clone, Debug)]
pub struct ElfBuilder {
    wide: bool,
    machine: u16,
    addr: u64,
    words: Vec<u32>,
    executable: bool,
}

impl ElfBuilder {
    fn with_class(wide: bool) -> Self {
        Self {
            wide,
            machine: EM_RISCV,
            addr: 0,
            words: Vec::new(),
            executable: true,
        }
    }

    /// A 32-bit (ELFCLASS32) image.
    pub fn elf32() -> Self {
        Self::with_class(false)
    }

    /// A 64-bit (ELFCLASS64) image.
    pub fn elf64() -> Self {
        Self::with_class(true)
    }

    pub fn machine(mut self, machine: u16) -> Self {
        self.machine = machine;
        self
    }

    pub fn text(mut self, addr: u64, words: &[u32]) -> Self {
        self.addr = addr;
        self.words = words.to_vec();
        self
    }

    /// Clears `SHF_EXECINSTR` on `.text`.
    pub fn non_executable(mut self) -> Self {
        self.executable = false;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let ehsize: usize = if self.wide { 64 } else { 52 };
        let shentsize: usize = if self.wide { 64 } else { 40 };
        let text: Vec<u8> = self.words.iter().flat_map(|w| w.to_le_bytes()).collect();
        let text_off = ehsize;
        let strtab_off = text_off + text.len();
        let shoff = (strtab_off + SHSTRTAB.len()).next_multiple_of(8);

        let mut out = vec![0x7F, b'E', b'L', b'F', if self.wide { 2 } else { 1 }, 1, 1];
        out.resize(16, 0);
        put16(&mut out, ET_EXEC);
        put16(&mut out, self.machine);
        put32(&mut out, 1);
        self.addr_field(&mut out, self.addr);
        self.addr_field(&mut out, 0);
        self.addr_field(&mut out, shoff as u64);
        put32(&mut out, 0);
        put16(&mut out, ehsize as u16);
        put16(&mut out, 0);
        put16(&mut out, 0);
        put16(&mut out, shentsize as u16);
        put16(&mut out, 3);
        put16(&mut out, 2);
        assert_eq!(out.len(), ehsize);

        out.extend_from_slice(&text);
        out.extend_from_slice(SHSTRTAB);
        out.resize(shoff + shentsize, 0);

        let flags = if self.executable {
            SHF_ALLOC | SHF_EXECINSTR
        } else {
            SHF_ALLOC
        };
        self.section(&mut out, TEXT_NAME, SHT_PROGBITS, flags, self.addr, text_off, text.len(), 4);
        self.section(&mut out, SHSTRTAB_NAME, SHT_STRTAB, 0, 0, strtab_off, SHSTRTAB.len(), 1);
        out
    }

    #[allow(clippy::too_many_arguments)]
    fn section(
        &self,
        out: &mut Vec<u8>,
        name: u32,
        kind: u32,
        flags: u64,
        addr: u64,
        offset: usize,
        size: usize,
        align: u64,
    ) {
        put32(out, name);
        put32(out, kind);
        self.addr_field(out, flags);
        self.addr_field(out, addr);
        self.addr_field(out, offset as u64);
        self.addr_field(out, size as u64);
        put32(out, 0);
        put32(out, 0);
        self.addr_field(out, align);
        self.addr_field(out, 0);
    }

    /// Writes a class-sized field (4 bytes for ELF32, 8 for ELF64).
    fn addr_field(&self, out: &mut Vec<u8>, value: u64) {
        if self.wide {
            out.extend_from_slice(&value.to_le_bytes());
        } else {
            put32(out, value as u32);
        }
    }
}

fn put16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}
