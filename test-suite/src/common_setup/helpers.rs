use anyhow::Error;
use cosmwasm_std::Timestamp;
use cw_multi_test::{App, AppResponse};

pub fn setup_block_time(router: &mut App, nanos: u64, height: Option<u64>) {
    let mut block = router.block_info();
    block.time = Timestamp::from_nanos(nanos);
    if let Some(h) = height {
        block.height = h;
    }
    router.set_block(block);
}

pub fn plus_block_seconds(router: &mut App, seconds: u64) {
    router.update_block(|block| {
        block.time = block.time.plus_seconds(seconds);
        block.height += seconds / 5 + 1;
    });
}

pub fn assert_error(res: Result<AppResponse, Error>, expected: String) {
    assert_eq!(res.unwrap_err().root_cause().to_string(), expected);
}

/// Looks up an attribute of a custom event emitted by a contract
pub fn event_attribute(res: &AppResponse, event: &str, key: &str) -> Option<String> {
    let ty = format!("wasm-{event}");
    res.events
        .iter()
        .filter(|e| e.ty == ty)
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
