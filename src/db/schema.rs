/// Column order of every daily partition file.
pub const PAIR_SNAPSHOT_COLUMNS: [&str; 30] = [
    "snapshot_ts",
    "pairAddress",
    "chainId",
    "dexId",
    "url",
    "baseToken_symbol",
    "baseToken_address",
    "quoteToken_symbol",
    "quoteToken_address",
    "priceNative",
    "priceUsd",
    "priceChange_h1",
    "priceChange_h6",
    "priceChange_h24",
    "txns_m5_buys",
    "txns_m5_sells",
    "txns_h1_buys",
    "txns_h1_sells",
    "txns_h6_buys",
    "txns_h6_sells",
    "txns_h24_buys",
    "txns_h24_sells",
    "volume_m5",
    "volume_h1",
    "volume_h6",
    "volume_h24",
    "liquidity_base",
    "liquidity_quote",
    "liquidity_usd",
    "pairCreatedAt",
];

pub const KEY_COLUMN_PAIR_ADDRESS: &str = "pairAddress";
pub const KEY_COLUMN_SNAPSHOT_TS: &str = "snapshot_ts";

pub const PARTITION_FILE_PREFIX: &str = "dexscreener_solana_";
pub const PARTITION_FILE_EXTENSION: &str = "csv";
