#[path = "../common/mod.rs"]
mod common;

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::spi::{ErrorKind, ErrorType, SpiBus};
use libmfrc522::device::Device;
use libmfrc522::protocol::registers::decode_address_byte;
use libmfrc522::protocol::Register;
use libmfrc522::transport::{NoPin, SpiTransport, Transport};

/// SPI bus backed by a plain register file: decodes each 2-byte frame and
/// reads or stores the addressed register.
#[derive(Clone)]
struct RegisterBus {
    regs: Rc<RefCell<[u8; 64]>>,
    frames: Rc<RefCell<Vec<[u8; 2]>>>,
}

impl Default for RegisterBus {
    fn default() -> Self {
        Self {
            regs: Rc::new(RefCell::new([0u8; 64])),
            frames: Rc::default(),
        }
    }
}

impl ErrorType for RegisterBus {
    type Error = ErrorKind;
}

impl SpiBus<u8> for RegisterBus {
    fn read(&mut self, _words: &mut [u8]) -> Result<(), ErrorKind> {
        Err(ErrorKind::Other)
    }

    fn write(&mut self, _words: &[u8]) -> Result<(), ErrorKind> {
        Err(ErrorKind::Other)
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), ErrorKind> {
        let frame = [write[0], write[1]];
        self.frames.borrow_mut().push(frame);
        let (reg, is_read) = decode_address_byte(frame[0]).ok_or(ErrorKind::Other)?;
        let mut regs = self.regs.borrow_mut();
        if is_read {
            read[0] = 0;
            read[1] = regs[reg.address() as usize];
        } else {
            regs[reg.address() as usize] = frame[1];
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), ErrorKind> {
        Err(ErrorKind::Other)
    }

    fn flush(&mut self) -> Result<(), ErrorKind> {
        Ok(())
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

#[test]
fn register_round_trip_over_spi() {
    let bus = RegisterBus::default();
    let mut t = SpiTransport::new(bus.clone(), NoPin, NoPin, NoDelay).unwrap();

    t.write_register(Register::TxAsk, 0x40).unwrap();
    assert_eq!(t.read_register(Register::TxAsk).unwrap(), 0x40);
    t.set_bits(Register::TxControl, 0x03).unwrap();
    t.clear_bits(Register::TxControl, 0x01).unwrap();
    assert_eq!(t.read_register(Register::TxControl).unwrap(), 0x02);

    let frames = bus.frames.borrow();
    assert_eq!(frames[0], [0x2A, 0x40]);
    assert_eq!(frames[1], [0xAA, 0x00]);
}

#[test]
fn device_initializes_over_spi() {
    let bus = RegisterBus::default();
    bus.regs.borrow_mut()[Register::Version.address() as usize] = 0x91;
    let t = SpiTransport::new(bus.clone(), NoPin, NoPin, NoDelay).unwrap();

    let dev = Device::new_with_transport(Box::new(t))
        .unwrap()
        .initialize()
        .unwrap();
    assert_eq!(dev.initial_version(), 0x91);

    let regs = bus.regs.borrow();
    assert_eq!(regs[Register::TMode.address() as usize], 0x8D);
    assert_eq!(regs[Register::TPrescaler.address() as usize], 0x3E);
    assert_eq!(regs[Register::TReloadL.address() as usize], 30);
    assert_eq!(regs[Register::Mode.address() as usize], 0x3D);
    assert_eq!(regs[Register::TxControl.address() as usize] & 0x03, 0x03);
}

#[test]
fn fifo_helpers_use_one_frame_per_byte() {
    let bus = RegisterBus::default();
    let mut t = SpiTransport::new(bus.clone(), NoPin, NoPin, NoDelay).unwrap();
    t.write_fifo(&[0x93, 0x20]).unwrap();
    assert_eq!(*bus.frames.borrow(), vec![[0x12, 0x93], [0x12, 0x20]]);
    assert_eq!(t.read_fifo(3).unwrap().len(), 3);
    assert_eq!(bus.frames.borrow().len(), 5);
}
