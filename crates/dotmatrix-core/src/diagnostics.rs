use std::fmt;
use std::sync::OnceLock;

/// Receives structured fault events from the core.
///
/// The core never formats or prints anything on its own: a front-end
/// installs an observer once per process and decides how (or whether) to
/// surface events. Both event types implement `Display` with a ready-made
/// one-line description for observers that just want to log.
pub trait Observer: Send + Sync + 'static {
    /// A bus access resolved to a region the machine cannot serve.
    fn bus_fault(&self, fault: &BusFault);

    /// An opcode byte with no defined instruction was fetched.
    fn illegal_opcode(&self, event: &IllegalOpcode);
}

static OBSERVER: OnceLock<Box<dyn Observer>> = OnceLock::new();

/// Install the process-wide observer. Fails if one is already installed,
/// handing the rejected observer back.
pub fn install_observer(observer: Box<dyn Observer>) -> Result<(), Box<dyn Observer>> {
    OBSERVER.set(observer)
}

pub(crate) fn notify_bus_fault(fault: &BusFault) {
    if let Some(observer) = OBSERVER.get() {
        observer.bus_fault(fault);
    }
}

pub(crate) fn notify_illegal_opcode(event: &IllegalOpcode) {
    if let Some(observer) = OBSERVER.get() {
        observer.illegal_opcode(event);
    }
}

/// Memory-map region a bus access resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    CartridgeRom,
    Vram,
    ExtRam,
    Wram,
    EchoRam,
    Oam,
    Unusable,
    Io,
    Hram,
    InterruptEnable,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::CartridgeRom => "cartridge ROM",
            Region::Vram => "VRAM",
            Region::ExtRam => "external RAM",
            Region::Wram => "WRAM",
            Region::EchoRam => "echo RAM",
            Region::Oam => "OAM",
            Region::Unusable => "unusable",
            Region::Io => "I/O",
            Region::Hram => "HRAM",
            Region::InterruptEnable => "IE",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// A read or write that resolved to a region the machine cannot serve.
///
/// Faults are observations, not errors: the bus answers 0 for the read (or
/// drops the write) and execution continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusFault {
    pub region: Region,
    pub addr: u16,
    pub access: Access,
}

impl fmt::Display for BusFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.access {
            Access::Read => write!(f, "blocked read from {} at {:#06X}", self.region, self.addr),
            Access::Write => write!(f, "dropped write to {} at {:#06X}", self.region, self.addr),
        }
    }
}

/// An opcode byte with no defined instruction (0xD3, 0xDB, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IllegalOpcode {
    pub opcode: u8,
    /// Address the opcode byte was fetched from.
    pub pc: u16,
}

impl fmt::Display for IllegalOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "undefined opcode {:#04X} at {:#06X}", self.opcode, self.pc)
    }
}

/// Latches the first unconsumed fault and counts the rest.
///
/// Every noted fault is also forwarded to the installed [`Observer`].
/// Debuggers poll `take_fault()`; the running count stays available either
/// way so a front-end can show "N blocked accesses" without draining.
#[derive(Debug, Default)]
pub struct FaultRecorder {
    pending: Option<BusFault>,
    total: u64,
}

impl FaultRecorder {
    pub fn note(&mut self, fault: BusFault) {
        notify_bus_fault(&fault);
        self.total += 1;
        if self.pending.is_none() {
            self.pending = Some(fault);
        }
    }

    pub fn take_fault(&mut self) -> Option<BusFault> {
        self.pending.take()
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}
