use std::sync::Arc;
use std::time::Duration;

use deshare_base::{
    AppConf, ChainConnection, CreateFundRequest, DeshareApp, Explorer, PreApproveRequest, TxState,
    WorkflowError,
};
use deshare_core::*;
use deshare_test::mocks::{
    MockErc20, MockFund, MockFundPlatform, MockGateway, MockWalletProvider, RecordingDisplay,
};
use deshare_test::test_utils::{mined, mined_after};
use url::Url;

const PLATFORM: H160 = H160::repeat_byte(0xfa);
const MANAGER: H160 = H160::repeat_byte(0x3a);
const USDT: H160 = H160::repeat_byte(0x11);
const BUSD: H160 = H160::repeat_byte(0x22);
const ACCOUNT: H160 = H160::repeat_byte(0xac);

fn conf() -> AppConf {
    AppConf {
        platform: PLATFORM,
        fund_manager: MANAGER,
        currencies: CurrencyAddresses {
            usdt: USDT,
            busd: BUSD,
        },
        explorer: Explorer::new(&Url::parse("https://testnet.bscscan.com").unwrap()),
        creation_overrides: TransactionOverrides {
            gas_limit: Some(U256::from(3_000_000u64)),
            gas_price: Some(U256::from(20_000_000_000u64)),
            value: Some(U256::exp10(17)),
            legacy: true,
        },
    }
}

fn wallet() -> MockWalletProvider {
    let mut wallet = MockWalletProvider::new();
    wallet
        .expect__request_accounts()
        .returning(|| Ok(vec![ACCOUNT]));
    wallet.expect__accounts().returning(|| Ok(vec![ACCOUNT]));
    wallet
}

fn listed_fund(address: H160) -> MockFund {
    let mut fund = MockFund::new();
    fund.expect__address().return_const(address);
    fund.expect__name().returning(|_| Ok("Alpha".into()));
    fund.expect__symbol().returning(|_| Ok("AALP".into()));
    fund.expect__portfolio_size().returning(|_| Ok(U256::zero()));
    fund.expect__total_supply().returning(|_| Ok(U256::exp10(18)));
    fund.expect__fund_type().returning(|_| Ok("equity".into()));
    fund
}

fn app(gateway: MockGateway, display: Arc<RecordingDisplay>) -> DeshareApp {
    let connection = ChainConnection {
        gateway: Arc::new(gateway),
        wallet: Arc::new(wallet()),
    };
    DeshareApp::new(conf(), Some(connection), display)
}

fn gateway_with_platform(platform: MockFundPlatform) -> MockGateway {
    let mut gateway = MockGateway::new();
    let mut platform = Some(platform);
    gateway
        .expect__fund_platform()
        .withf(|address| *address == PLATFORM)
        .times(1)
        .returning(move |_| Box::new(platform.take().unwrap()));
    gateway
}

fn create_request() -> CreateFundRequest {
    CreateFundRequest {
        initial_amount: "1000".into(),
        name: "Alpha".into(),
        symbol: "ALP".into(),
        fund_type: "equity".into(),
        base_currency: "USDT".into(),
        seed_funding: "250.5".into(),
    }
}

#[tokio::test]
async fn without_a_provider_nothing_is_attempted() {
    let display = Arc::new(RecordingDisplay::default());
    let app = DeshareApp::new(conf(), None, display.clone());

    let result = app.start().await;

    assert!(matches!(
        result,
        Err(WorkflowError::Wallet(WalletError::ProviderAbsent))
    ));
    assert_eq!(display.notices().len(), 1);
    assert!(app.session().is_none());
}

#[tokio::test]
async fn confirmed_creation_refreshes_the_listing() {
    let fund = H160::repeat_byte(0x01);
    let mut platform = MockFundPlatform::new();
    platform
        .expect__handle()
        .returning(|| ContractHandle::new(PLATFORM, vec![]));
    platform
        .expect__get_all_funds()
        .times(1)
        .returning(move |_| Ok(vec![fund]));
    platform
        .expect__create_fund()
        .withf(|params, sender, overrides| {
            params.symbol == "AALP"
                && params.base_currency == USDT
                && params.manager == MANAGER
                && params.seed_funding == U256::from(2505u64) * U256::exp10(17)
                && params.initial_amount == U256::from(1000u64) * U256::exp10(18)
                && *sender == ACCOUNT
                && overrides.value == Some(U256::exp10(17))
        })
        .times(1)
        .returning(|_, _, _| Ok(mined(H256::repeat_byte(0x77), true)));

    let mut gateway = gateway_with_platform(platform);
    gateway
        .expect__fund()
        .times(1)
        .returning(|address| Box::new(listed_fund(address)));

    let display = Arc::new(RecordingDisplay::default());
    let app = app(gateway, display.clone());
    app.connect().await.unwrap();

    let state = app.create_fund(&create_request()).await.unwrap();

    assert!(matches!(state, TxState::Confirmed(_)));
    assert_eq!(display.table().count(fund), 1);
    assert_eq!(
        display.last_notice().unwrap().message,
        "Mutual fund successfully created. Check your transaction status"
    );
    assert!(display.control_enabled(Action::CreateFund));
}

#[tokio::test]
async fn reverted_creation_does_not_refresh() {
    let mut platform = MockFundPlatform::new();
    platform
        .expect__handle()
        .returning(|| ContractHandle::new(PLATFORM, vec![]));
    platform.expect__get_all_funds().never();
    platform
        .expect__create_fund()
        .times(1)
        .returning(|_, _, _| Ok(mined(H256::repeat_byte(0x78), false)));
    let mut gateway = gateway_with_platform(platform);
    gateway.expect__fund().never();

    let display = Arc::new(RecordingDisplay::default());
    let app = app(gateway, display.clone());
    app.connect().await.unwrap();

    let state = app.create_fund(&create_request()).await.unwrap();

    assert!(matches!(state, TxState::Failed { .. }));
    assert!(display
        .notices()
        .iter()
        .all(|notice| notice.kind != NoticeKind::Success));
    assert!(display.control_enabled(Action::CreateFund));
}

#[tokio::test]
async fn pre_approval_uses_the_chosen_currency() {
    let mut gateway = gateway_with_platform(MockFundPlatform::new());
    gateway
        .expect__token()
        .withf(|address| *address == BUSD)
        .times(1)
        .returning(|address| {
            let mut token = MockErc20::new();
            token.expect__address().return_const(address);
            token
                .expect__approve()
                .withf(|spender, amount, sender| {
                    *spender == PLATFORM
                        && *amount == U256::from(100u64) * U256::exp10(18)
                        && *sender == ACCOUNT
                })
                .times(1)
                .returning(|_, _, _| Ok(mined(H256::repeat_byte(0x55), true)));
            Box::new(token)
        });

    let display = Arc::new(RecordingDisplay::default());
    let app = app(gateway, display.clone());
    app.connect().await.unwrap();

    let state = app
        .pre_approve(&PreApproveRequest {
            base_currency: "BUSD".into(),
            seed_funding: "100".into(),
        })
        .await
        .unwrap();

    assert!(matches!(state, TxState::Confirmed(_)));
    let notices = display.notices();
    assert_eq!(notices.len(), 2);
    assert!(notices[0]
        .message
        .starts_with("Pre-approval txn sent and pending confirmation"));
}

#[tokio::test]
async fn unknown_currency_sends_nothing() {
    let mut gateway = gateway_with_platform(MockFundPlatform::new());
    gateway.expect__token().never();

    let display = Arc::new(RecordingDisplay::default());
    let app = app(gateway, display.clone());
    app.connect().await.unwrap();

    let result = app
        .pre_approve(&PreApproveRequest {
            base_currency: "DAI".into(),
            seed_funding: "100".into(),
        })
        .await;

    assert!(matches!(result, Err(WorkflowError::UnsupportedCurrency(ticker)) if ticker == "DAI"));
    assert_eq!(display.last_notice().unwrap().kind, NoticeKind::Error);
}

#[tokio::test]
async fn appended_funds_stack_until_the_next_refresh() {
    let fund = H160::repeat_byte(0x01);
    let mut platform = MockFundPlatform::new();
    platform
        .expect__handle()
        .returning(|| ContractHandle::new(PLATFORM, vec![]));
    platform
        .expect__get_all_funds()
        .withf(|caller| *caller == ACCOUNT)
        .times(4)
        .returning(move |_| Ok(vec![fund]));
    let mut gateway = gateway_with_platform(platform);
    gateway
        .expect__fund()
        .times(4)
        .returning(|address| Box::new(listed_fund(address)));

    let display = Arc::new(RecordingDisplay::default());
    let app = app(gateway, display.clone());

    let records = app.start().await.unwrap();
    assert_eq!(records.len(), 1);

    let appended = app.append_funds().await.unwrap();
    assert_eq!(appended[0].symbol.as_deref(), Some("AALP"));
    app.append_funds().await.unwrap();
    assert_eq!(display.table().count(fund), 3);
    assert!(display
        .table()
        .rows()
        .iter()
        .all(|row| row.cells[&FundColumn::Name] == "Alpha"));

    app.refresh_funds().await.unwrap();
    assert_eq!(display.table().count(fund), 1);
}

#[tokio::test]
async fn actions_need_a_session() {
    let gateway = gateway_with_platform(MockFundPlatform::new());
    let display = Arc::new(RecordingDisplay::default());
    let app = app(gateway, display.clone());

    let result = app.create_fund(&create_request()).await;
    assert!(matches!(result, Err(WorkflowError::NotConnected)));

    app.connect().await.unwrap();
    app.disconnect();
    assert!(matches!(
        app.refresh_funds().await,
        Err(WorkflowError::NotConnected)
    ));
}

#[tokio::test(start_paused = true)]
async fn second_creation_while_pending_is_rejected() {
    let mut platform = MockFundPlatform::new();
    platform
        .expect__handle()
        .returning(|| ContractHandle::new(PLATFORM, vec![]));
    platform.expect__get_all_funds().returning(|_| Ok(vec![]));
    platform.expect__create_fund().times(1).returning(|_, _, _| {
        Ok(mined_after(
            H256::repeat_byte(0x99),
            Duration::from_secs(30),
        ))
    });
    let gateway = gateway_with_platform(platform);

    let display = Arc::new(RecordingDisplay::default());
    let app = app(gateway, display.clone());
    app.connect().await.unwrap();

    let request = create_request();
    let (first, second) = tokio::join!(app.create_fund(&request), async {
        tokio::time::sleep(Duration::from_secs(1)).await;
        app.create_fund(&request).await
    });

    assert!(matches!(first, Ok(TxState::Confirmed(_))));
    assert!(matches!(
        second,
        Err(WorkflowError::ActionInFlight(Action::CreateFund))
    ));
}
