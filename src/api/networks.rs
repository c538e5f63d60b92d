#[derive(Debug, Clone)]
pub struct SuiNetwork {
    pub name: &'static str,
    pub rpc_url: &'static str,
}

const MAINNET: SuiNetwork = SuiNetwork {
    name: "mainnet",
    rpc_url: "https://fullnode.mainnet.sui.io:443",
};

const TESTNET: SuiNetwork = SuiNetwork {
    name: "testnet",
    rpc_url: "https://fullnode.testnet.sui.io:443",
};

const DEVNET: SuiNetwork = SuiNetwork {
    name: "devnet",
    rpc_url: "https://fullnode.devnet.sui.io:443",
};

const LOCALNET: SuiNetwork = SuiNetwork {
    name: "localnet",
    rpc_url: "http://127.0.0.1:9000",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
    Localnet,
}

impl From<Network> for SuiNetwork {
    fn from(value: Network) -> Self {
        match value {
            Network::Mainnet => MAINNET,
            Network::Testnet => TESTNET,
            Network::Devnet => DEVNET,
            Network::Localnet => LOCALNET,
        }
    }
}
