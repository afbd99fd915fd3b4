// Drive the card workflow against the in-crate simulator: wait for a card,
// print its UID, check it against an allow-list and rewrite one block.
//
// Usage:
//   RUST_LOG=debug cargo run -p libmfrc522 --example simulated_reader

use anyhow::Context;
use libmfrc522::prelude::*;
use libmfrc522::utils::DEFAULT_CARD_TIMEOUT_MS;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let uid: Uid = "04:11:22:33".parse()?;
    let transport = MockTransport::with_card(VirtualCard::new(uid));

    let device = DeviceBuilder::new()
        .with_transport(Box::new(transport.clone()))
        .with_config(ReaderConfig::default().with_card_poll_interval_ms(20))
        .build()
        .context("reader did not come up")?;
    println!("MFRC522 version {:#04x}", device.initial_version());

    let mut session = CardSession::with_std_delay(device);
    if session.wait_for_card(DEFAULT_CARD_TIMEOUT_MS)? == Detection::Timeout {
        println!("no card in the field");
        return Ok(());
    }

    let token = session.read_uid()?;
    println!("card UID: {}", token);

    let allowed: MemoryAccessList = ["04112233"].into_iter().collect();
    println!("allowed: {}", allowed.has_user(&token));

    let card = session.select(&uid)?;
    println!("SAK {:#04x}: {}", card.sak(), card.info().kind);

    let key = AuthKey::factory_default();
    let mut payload = [0u8; 16];
    payload[..11].copy_from_slice(b"hello world");
    session.write_sector_block(&uid, 1, 0, &BlockData::from_bytes(payload), Some(&key))?;

    let block = session.read_sector_block(&uid, 1, 0, Some(&key))?;
    println!("sector 1 block 0: {} ({})", block.to_hex(), block.to_ascii_safe());

    session.stop_crypto1()?;
    Ok(())
}
