use tracing::{info, instrument, warn};

use deshare_core::{DisplaySurface, Notice, WalletError, WalletProvider, H160};

/// Where to get a wallet when none is configured
pub const WALLET_REMEDIATION_URL: &str = "https://metamask.io/";

/// An authorized wallet account. Every send and read runs as this account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// The selected account
    pub account: H160,
}

/// Authorize against the wallet provider and select its first account.
///
/// Without a provider this shows one error notice and asks nothing of the
/// wallet. A rejected authorization may be retried by calling again.
#[instrument(skip_all)]
pub async fn connect_wallet(
    wallet: Option<&dyn WalletProvider>,
    display: &dyn DisplaySurface,
) -> Result<Session, WalletError> {
    let Some(wallet) = wallet else {
        warn!("web3 provider not found");
        display.show_notice(
            Notice::error(
                "Make sure your wallet is configured correctly. You may download and install MetaMask here",
            )
            .with_link(WALLET_REMEDIATION_URL),
        );
        return Err(WalletError::ProviderAbsent);
    };

    if let Err(err) = wallet.request_accounts().await {
        warn!(error = %err, "wallet authorization rejected");
        display.show_notice(Notice::error(format!(
            "Wallet authorization rejected: {err}"
        )));
        return Err(WalletError::AuthorizationRejected(err));
    }

    let account = match wallet.accounts().await {
        Ok(accounts) => accounts.first().copied(),
        Err(err) => {
            warn!(error = %err, "failed to read wallet accounts");
            display.show_notice(Notice::error(format!("Failed to read wallet accounts: {err}")));
            return Err(err.into());
        }
    };
    let Some(account) = account else {
        display.show_notice(Notice::error("Wallet exposes no accounts, unlock it and retry"));
        return Err(WalletError::NoAccounts);
    };
    info!(?account, "wallet connected");
    Ok(Session { account })
}
