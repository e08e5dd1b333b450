#![allow(clippy::enum_variant_names)]
#![allow(missing_docs)]

use ethers::contract::abigen;

abigen!(FundPlatform, "$CARGO_MANIFEST_DIR/abis/FundPlatform.abi.json");

abigen!(Fund, "$CARGO_MANIFEST_DIR/abis/Fund.abi.json");

abigen!(Erc20, "$CARGO_MANIFEST_DIR/abis/Erc20.abi.json");
