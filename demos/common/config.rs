use dotenv::dotenv;
use envconfig::Envconfig;
use eyre::Result;
use sui_events_rs::prelude::*;
use tokio::sync::OnceCell;
use tracing::*;

pub struct Config {
    pub client: SuiEventClient<HttpTransport>,
    pub event_type: String,
    pub tx_digest: Option<String>,
}

impl Config {
    pub async fn from_env() -> Result<&'static Config> {
        CONFIG.get_or_try_init(Config::init_from_env).await
    }

    async fn init_from_env() -> Result<Config> {
        // a missing .env file is fine, the variables may come from the shell
        let _ = dotenv();
        let config = ConfigRaw::init_from_env()?;

        info!(
            rpc_url = %config.rpc_url,
            event_type = %config.event_type,
            "config"
        );

        Ok(Config {
            client: SuiEventClient::new(HttpTransport::new(config.rpc_url)),
            event_type: config.event_type,
            tx_digest: config.tx_digest,
        })
    }
}

static CONFIG: OnceCell<Config> = OnceCell::const_new();

#[derive(Envconfig)]
pub struct ConfigRaw {
    #[envconfig(from = "SUI_RPC_URL", default = "https://fullnode.devnet.sui.io:443")]
    pub rpc_url: String,
    #[envconfig(from = "SUI_EVENT_TYPE", default = "0x2::devnet_nft::MintNFTEvent")]
    pub event_type: String,
    #[envconfig(from = "SUI_TX_DIGEST")]
    pub tx_digest: Option<String>,
}
