use minichain_core::chain::Chain;
use minichain_core::{hash_for_block, pow};

#[test]
fn mine_hello_end_to_end() -> anyhow::Result<()> {
    let mut chain = Chain::new();
    assert_eq!(chain.len(), 1);

    chain.mine("hello")?;

    assert_eq!(chain.len(), 2);
    let blocks = chain.blocks();
    let genesis = &blocks[0];
    let mined = &blocks[1];

    assert_eq!(mined.index, 1);
    assert_eq!(mined.previous_hash, genesis.hash);
    assert!(mined.hash.starts_with("000"));
    assert_eq!(hash_for_block(mined), mined.hash);
    Ok(())
}

#[test]
fn mine_three_payloads_in_sequence() -> anyhow::Result<()> {
    let mut chain = Chain::new();
    for data in ["a", "b", "c"] {
        chain.mine(data)?;
    }

    assert_eq!(chain.len(), 4);
    let blocks = chain.blocks();
    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(block.index, i as u64);
    }
    for pair in blocks.windows(2) {
        assert_eq!(pair[1].previous_hash, pair[0].hash);
        assert!(pow::meets_difficulty(&pair[1].hash, chain.difficulty()));
    }
    assert_eq!(blocks[1].data, "a");
    assert_eq!(blocks[2].data, "b");
    assert_eq!(blocks[3].data, "c");
    Ok(())
}

#[test]
fn mined_chain_survives_json_round_trip() -> anyhow::Result<()> {
    let mut chain = Chain::with_difficulty(2);
    chain.mine("payload")?;

    let json = serde_json::to_string(chain.blocks())?;
    let blocks: Vec<minichain_core::Block> = serde_json::from_str(&json)?;

    assert_eq!(blocks.len(), 2);
    assert_eq!(hash_for_block(&blocks[1]), blocks[1].hash);
    assert_eq!(blocks[1].previous_hash, blocks[0].hash);
    Ok(())
}
