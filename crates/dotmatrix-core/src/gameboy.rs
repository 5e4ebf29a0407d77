use crate::{bus::Bus, cartridge::Cartridge, cpu::Cpu};

/// The whole machine: CPU plus the bus it drives.
///
/// Front-ends construct one of these, connect a cartridge, and call
/// [`step`](GameBoy::step) in a loop.
pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: Bus,
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: Bus::new(),
        }
    }

    pub fn load_cart(&mut self, cart: Cartridge) {
        self.bus.connect_cart(cart);
    }

    /// Execute one instruction (or one idle halt cycle).
    pub fn step(&mut self) {
        self.cpu.step(&mut self.bus);
    }

    /// Reset to the post-boot state while preserving the loaded cartridge.
    pub fn reset(&mut self) {
        let strict = self.cpu.strict;
        let cart = self.bus.cart.take();
        self.cpu = Cpu::new();
        self.cpu.strict = strict;
        self.bus = Bus::new();
        if let Some(c) = cart {
            self.bus.connect_cart(c);
        }
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_preserves_cartridge_and_strictness() {
        let mut gb = GameBoy::new();
        gb.cpu.strict = true;
        let mut rom = vec![0u8; 0x8000];
        rom[0x0100] = 0x3C; // INC A
        gb.load_cart(Cartridge::load(rom));

        gb.step();
        assert_eq!(gb.cpu.regs.a, 0x02);

        gb.reset();
        assert_eq!(gb.cpu.regs.pc, 0x0100);
        assert_eq!(gb.cpu.regs.a, 0x01);
        assert!(gb.cpu.strict);
        assert!(gb.bus.cart.is_some());
    }
}
