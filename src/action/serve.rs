use provisioning::service::server::{Configuration, Error, Server};

#[derive(clap::Parser)]
pub(crate) struct Action {
    /// Path to the configuration toml file, default to /etc/provisioning/provisioning.toml.
    #[clap(
        short,
        long,
        default_value = "/etc/provisioning/provisioning.toml",
        env = "PROVISIONING_CONFIG"
    )]
    pub config_path: String,
}

impl Action {
    fn configuration(&self) -> Result<Configuration, Error> {
        Configuration::from_path(&self.config_path)
    }

    pub(crate) async fn execute(self) -> Result<(), Error> {
        let config = self.configuration()?;
        Server::from_config(config)?.run().await
    }
}
