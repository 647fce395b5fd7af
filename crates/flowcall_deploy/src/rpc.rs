//! [`Deployer`] backed by an Ethereum JSON-RPC node.
//!
//! Transactions are sent with `eth_sendTransaction` from an account the node
//! manages (unlocked dev/test node or a signing proxy), then confirmed by
//! polling `eth_getTransactionReceipt`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::abi::to_hex_data;
use crate::address::Address;
use crate::artifact::{ArtifactSet, ContractKind};
use crate::deployer::{ContractInstance, Deployer, TxReceipt, WiringCall};
use crate::error::DeployError;
use crate::rpc_config::validate_url;

// ---------------------------------------------------------------------------
// JSON-RPC wire types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReceipt {
    transaction_hash: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    contract_address: Option<String>,
    #[serde(default)]
    block_number: Option<String>,
    #[serde(default)]
    gas_used: Option<String>,
}

impl RawReceipt {
    /// Pre-Byzantium receipts carry no status; treat them as success.
    fn succeeded(&self) -> bool {
        self.status.as_deref().and_then(parse_quantity) != Some(0)
    }

    fn to_receipt(&self) -> TxReceipt {
        TxReceipt {
            tx_hash: self.transaction_hash.clone(),
            block_number: self.block_number.as_deref().and_then(parse_quantity),
            gas_used: self.gas_used.as_deref().and_then(parse_quantity),
        }
    }
}

/// Parse a JSON-RPC hex quantity such as `"0x1b4"`.
fn parse_quantity(s: &str) -> Option<u64> {
    let digits = s.strip_prefix("0x")?;
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

fn unwrap_response(method: &str, resp: RpcResponse) -> Result<Value, DeployError> {
    if let Some(err) = resp.error {
        return Err(DeployError::Rpc(format!(
            "{method} returned error {}: {}",
            err.code, err.message
        )));
    }
    Ok(resp.result.unwrap_or(Value::Null))
}

// ---------------------------------------------------------------------------
// Deployer
// ---------------------------------------------------------------------------

/// Connection and confirmation settings for [`JsonRpcDeployer`].
#[derive(Debug, Clone)]
pub struct RpcDeployerSettings {
    pub rpc_url: String,
    /// Sender account; the node's first account when `None`.
    pub from: Option<Address>,
    /// Refuse to send anything if the node reports a different chain.
    pub expected_chain_id: Option<u64>,
    pub request_timeout: Duration,
    pub confirmation_timeout: Duration,
    pub poll_interval: Duration,
}

pub struct JsonRpcDeployer {
    client: reqwest::Client,
    settings: RpcDeployerSettings,
    artifacts: ArtifactSet,
    next_id: AtomicU64,
    sender: OnceCell<Address>,
    deployed: Mutex<HashMap<ContractKind, Address>>,
}

impl JsonRpcDeployer {
    pub fn new(settings: RpcDeployerSettings, artifacts: ArtifactSet) -> Result<Self, DeployError> {
        if !validate_url(&settings.rpc_url) {
            return Err(DeployError::Rpc(format!(
                "invalid RPC URL: {}",
                settings.rpc_url
            )));
        }
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| DeployError::Rpc(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            settings,
            artifacts,
            next_id: AtomicU64::new(1),
            sender: OnceCell::new(),
            deployed: Mutex::new(HashMap::new()),
        })
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, DeployError> {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        let resp = self
            .client
            .post(&self.settings.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeployError::Rpc(format!("{method}: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(DeployError::Rpc(format!("{method}: HTTP {status} - {text}")));
        }

        let data: RpcResponse = resp
            .json()
            .await
            .map_err(|e| DeployError::Rpc(format!("{method}: JSON parse error: {e}")))?;
        unwrap_response(method, data)
    }

    /// Checks the chain ID and resolves the sender, once per deployer.
    async fn sender(&self) -> Result<Address, DeployError> {
        self.sender
            .get_or_try_init(|| self.resolve_sender())
            .await
            .copied()
    }

    async fn resolve_sender(&self) -> Result<Address, DeployError> {
        if let Some(expected) = self.settings.expected_chain_id {
            let value = self.request("eth_chainId", json!([])).await?;
            let actual = value
                .as_str()
                .and_then(parse_quantity)
                .ok_or_else(|| DeployError::Rpc(format!("eth_chainId returned {value}")))?;
            if actual != expected {
                return Err(DeployError::Rpc(format!(
                    "node is on chain {actual}, expected {expected}"
                )));
            }
        }

        if let Some(from) = self.settings.from {
            return Ok(from);
        }
        let accounts = self.request("eth_accounts", json!([])).await?;
        let first = accounts
            .as_array()
            .and_then(|a| a.first())
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                DeployError::Rpc("node has no unlocked accounts; set a from address".into())
            })?;
        let from: Address = first.parse()?;
        info!(%from, "using node account as sender");
        Ok(from)
    }

    async fn send_transaction(&self, tx: Value) -> Result<String, DeployError> {
        let value = self.request("eth_sendTransaction", json!([tx])).await?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DeployError::Rpc(format!("eth_sendTransaction returned {value}")))
    }

    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<RawReceipt, DeployError> {
        let started = tokio::time::Instant::now();
        let deadline = started + self.settings.confirmation_timeout;
        loop {
            let value = self
                .request("eth_getTransactionReceipt", json!([tx_hash]))
                .await?;
            if !value.is_null() {
                return serde_json::from_value(value).map_err(|e| {
                    DeployError::Rpc(format!("malformed receipt for {tx_hash}: {e}"))
                });
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(DeployError::Timeout {
                    tx_hash: tx_hash.to_string(),
                    waited_secs: started.elapsed().as_secs(),
                });
            }
            debug!(tx_hash, "waiting for confirmation");
            tokio::time::sleep(self.settings.poll_interval).await;
        }
    }
}

fn deploy_tx(from: Address, bytecode: &str) -> Value {
    json!({ "from": from.to_string(), "data": bytecode })
}

fn call_tx(from: Address, to: Address, call: &WiringCall) -> Value {
    json!({
        "from": from.to_string(),
        "to": to.to_string(),
        "data": to_hex_data(&call.calldata()),
    })
}

/// Contract address from a creation receipt, or the reason there is none.
fn created_address(receipt: &RawReceipt) -> Result<Address, String> {
    if !receipt.succeeded() {
        return Err(format!("creation tx {} reverted", receipt.transaction_hash));
    }
    let raw = receipt
        .contract_address
        .as_deref()
        .ok_or_else(|| format!("receipt for {} has no contract address", receipt.transaction_hash))?;
    let address: Address = raw.parse().map_err(|e: DeployError| e.to_string())?;
    if address.is_zero() {
        return Err(format!(
            "receipt for {} has a zero contract address",
            receipt.transaction_hash
        ));
    }
    Ok(address)
}

#[async_trait]
impl Deployer for JsonRpcDeployer {
    async fn deploy(&self, kind: ContractKind) -> Result<(), DeployError> {
        let from = self.sender().await?;
        let artifact = self.artifacts.get(kind);
        let failed = |reason: String| DeployError::Deployment {
            contract: kind,
            reason,
        };

        let tx_hash = self
            .send_transaction(deploy_tx(from, &artifact.bytecode))
            .await
            .map_err(|e| failed(e.to_string()))?;
        info!(contract = %kind, %tx_hash, "deployment sent");

        let receipt = self
            .wait_for_receipt(&tx_hash)
            .await
            .map_err(|e| failed(e.to_string()))?;
        let address = created_address(&receipt).map_err(failed)?;
        self.deployed.lock().insert(kind, address);
        info!(contract = %kind, %address, %tx_hash, "contract deployed");
        Ok(())
    }

    async fn deployed(&self, kind: ContractKind) -> Result<ContractInstance, DeployError> {
        self.deployed
            .lock()
            .get(&kind)
            .map(|address| ContractInstance::new(kind, *address))
            .ok_or(DeployError::NotDeployed(kind))
    }

    async fn transact(
        &self,
        instance: &ContractInstance,
        call: WiringCall,
    ) -> Result<TxReceipt, DeployError> {
        let from = self.sender().await?;
        let failed = |reason: String| DeployError::Transaction {
            contract: instance.kind(),
            method: call.method(),
            reason,
        };

        let tx_hash = self
            .send_transaction(call_tx(from, instance.address(), &call))
            .await
            .map_err(|e| failed(e.to_string()))?;
        debug!(contract = %instance.kind(), method = call.method(), %tx_hash, "transaction sent");

        let raw = self
            .wait_for_receipt(&tx_hash)
            .await
            .map_err(|e| failed(e.to_string()))?;
        if !raw.succeeded() {
            warn!(contract = %instance.kind(), method = call.method(), %tx_hash, "transaction reverted");
            return Err(failed(format!("tx {tx_hash} reverted")));
        }
        Ok(raw.to_receipt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ContractArtifact;
    use crate::migration::{DeployOutcome, deploy_for};
    use httpmock::Mock;
    use httpmock::prelude::*;

    const SENDER: &str = "0x00000000000000000000000000000000000000aa";
    const FLOW_CALL: &str = "0x00000000000000000000000000000000000000c1";
    const TOKEN_RECEIVER: &str = "0x00000000000000000000000000000000000000c2";
    const FLOW_CALL_CODE: &str = "0x60806040";
    const TOKEN_RECEIVER_CODE: &str = "0x60606040";

    fn artifacts() -> ArtifactSet {
        let artifact = |kind: ContractKind| ContractArtifact {
            contract_name: kind.contract_name().into(),
            abi: json!([]),
            bytecode: match kind {
                ContractKind::FlowCall => FLOW_CALL_CODE.into(),
                ContractKind::TokenReceiver => TOKEN_RECEIVER_CODE.into(),
            },
        };
        ArtifactSet {
            flow_call: artifact(ContractKind::FlowCall),
            token_receiver: artifact(ContractKind::TokenReceiver),
        }
    }

    fn settings(url: &str) -> RpcDeployerSettings {
        RpcDeployerSettings {
            rpc_url: url.into(),
            from: None,
            expected_chain_id: Some(97),
            request_timeout: Duration::from_secs(5),
            confirmation_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_millis(100),
        }
    }

    fn tx_hash(n: u64) -> String {
        format!("0x{n:064x}")
    }

    fn created(n: u64, address: &str) -> Value {
        json!({
            "transactionHash": tx_hash(n),
            "status": "0x1",
            "contractAddress": address,
            "blockNumber": format!("0x{n:x}"),
            "gasUsed": "0x5208"
        })
    }

    fn mined(n: u64, status: &str) -> Value {
        json!({ "transactionHash": tx_hash(n), "status": status, "blockNumber": format!("0x{n:x}") })
    }

    /// Answer `method` calls whose body contains every needle.
    fn answer<'a>(
        server: &'a MockServer,
        method: &str,
        needles: &[String],
        result: Value,
    ) -> Mock<'a> {
        server.mock(|when, then| {
            let mut when = when
                .method(POST)
                .body_includes(format!("\"method\":\"{method}\""));
            for needle in needles {
                when = when.body_includes(needle.clone());
            }
            then.status(200)
                .json_body(json!({ "jsonrpc": "2.0", "id": 1, "result": result }));
        })
    }

    struct FakeNode<'a> {
        chain_id: Mock<'a>,
        accounts: Mock<'a>,
        deploy_token_receiver: Mock<'a>,
        set_token_receiver: Mock<'a>,
        set_flow_call_address: Mock<'a>,
        _rest: Vec<Mock<'a>>,
    }

    /// A node that hands out tx 1..=4 in migration order and answers each
    /// receipt lookup with the matching entry of `receipts` (null = pending).
    fn fake_node<'a>(
        server: &'a MockServer,
        chain_id: &str,
        receipts: [Value; 4],
    ) -> FakeNode<'a> {
        let from = format!("\"from\":\"{SENDER}\"");
        let mut rest: Vec<Mock<'a>> = receipts
            .into_iter()
            .zip(1u64..)
            .map(|(receipt, n)| {
                answer(
                    server,
                    "eth_getTransactionReceipt",
                    &[format!("\"{}\"", tx_hash(n))],
                    receipt,
                )
            })
            .collect();
        rest.push(answer(
            server,
            "eth_sendTransaction",
            &[from.clone(), format!("\"data\":\"{FLOW_CALL_CODE}\"")],
            json!(tx_hash(1)),
        ));
        FakeNode {
            chain_id: answer(server, "eth_chainId", &[], json!(chain_id)),
            accounts: answer(server, "eth_accounts", &[], json!([SENDER])),
            deploy_token_receiver: answer(
                server,
                "eth_sendTransaction",
                &[from.clone(), format!("\"data\":\"{TOKEN_RECEIVER_CODE}\"")],
                json!(tx_hash(2)),
            ),
            set_token_receiver: answer(
                server,
                "eth_sendTransaction",
                &[from.clone(), format!("\"to\":\"{FLOW_CALL}\"")],
                json!(tx_hash(3)),
            ),
            set_flow_call_address: answer(
                server,
                "eth_sendTransaction",
                &[from, format!("\"to\":\"{TOKEN_RECEIVER}\"")],
                json!(tx_hash(4)),
            ),
            _rest: rest,
        }
    }

    fn healthy_receipts() -> [Value; 4] {
        [
            created(1, FLOW_CALL),
            created(2, TOKEN_RECEIVER),
            mined(3, "0x1"),
            mined(4, "0x1"),
        ]
    }

    fn local_settings(server: &MockServer) -> RpcDeployerSettings {
        RpcDeployerSettings {
            confirmation_timeout: Duration::from_millis(300),
            poll_interval: Duration::from_millis(20),
            ..settings(&server.base_url())
        }
    }

    fn local_deployer(server: &MockServer) -> JsonRpcDeployer {
        JsonRpcDeployer::new(local_settings(server), artifacts()).unwrap()
    }

    #[tokio::test]
    async fn deploys_and_wires_against_a_node() {
        let server = MockServer::start();
        let node = fake_node(&server, "0x61", healthy_receipts());
        let deployer = local_deployer(&server);

        let outcome = deploy_for(&deployer, "bsctestnet").await.unwrap();

        assert_eq!(
            outcome,
            DeployOutcome::Wired {
                network: crate::network::Network::BscTestnet,
                flow_call: FLOW_CALL.parse().unwrap(),
                token_receiver: TOKEN_RECEIVER.parse().unwrap(),
            }
        );
        // Chain check and sender lookup happen once per deployer.
        node.chain_id.assert_calls(1);
        node.accounts.assert_calls(1);
        node.set_token_receiver.assert_calls(1);
        node.set_flow_call_address.assert_calls(1);
    }

    #[tokio::test]
    async fn configured_sender_skips_account_lookup() {
        let server = MockServer::start();
        let node = fake_node(&server, "0x61", healthy_receipts());
        let settings = RpcDeployerSettings {
            from: Some(SENDER.parse().unwrap()),
            ..local_settings(&server)
        };
        let deployer = JsonRpcDeployer::new(settings, artifacts()).unwrap();

        deployer.deploy(ContractKind::FlowCall).await.unwrap();

        node.accounts.assert_calls(0);
        let instance = deployer.deployed(ContractKind::FlowCall).await.unwrap();
        assert_eq!(instance.address().to_string(), FLOW_CALL);
    }

    #[tokio::test]
    async fn wrong_chain_sends_nothing() {
        let server = MockServer::start();
        // 0x38 is BSC mainnet; the deployer expects the testnet.
        let node = fake_node(&server, "0x38", healthy_receipts());
        let deployer = local_deployer(&server);

        let err = deploy_for(&deployer, "bsctestnet").await.unwrap_err();

        assert!(matches!(err, DeployError::Rpc(ref msg) if msg.contains("chain 56, expected 97")));
        node.accounts.assert_calls(0);
        node.deploy_token_receiver.assert_calls(0);
        node.set_token_receiver.assert_calls(0);
    }

    #[tokio::test]
    async fn reverted_flow_call_creation_stops_the_run() {
        let server = MockServer::start();
        let mut receipts = healthy_receipts();
        receipts[0] = mined(1, "0x0");
        let node = fake_node(&server, "0x61", receipts);
        let deployer = local_deployer(&server);

        let err = deploy_for(&deployer, "bsctestnet").await.unwrap_err();

        assert!(matches!(
            err,
            DeployError::Deployment {
                contract: ContractKind::FlowCall,
                ..
            }
        ));
        node.deploy_token_receiver.assert_calls(0);
        node.set_token_receiver.assert_calls(0);
    }

    #[tokio::test]
    async fn unconfirmed_creation_is_a_deployment_failure() {
        let server = MockServer::start();
        let mut receipts = healthy_receipts();
        receipts[1] = Value::Null;
        let node = fake_node(&server, "0x61", receipts);
        let deployer = local_deployer(&server);

        let err = deploy_for(&deployer, "bsctestnet").await.unwrap_err();

        let DeployError::Deployment { contract, reason } = &err else {
            panic!("expected a deployment failure, got {err:?}");
        };
        assert_eq!(*contract, ContractKind::TokenReceiver);
        assert!(reason.contains(&tx_hash(2)));
        assert!(reason.contains("not confirmed"));
        node.set_token_receiver.assert_calls(0);
        // FlowCall stays deployed.
        assert!(deployer.deployed(ContractKind::FlowCall).await.is_ok());
    }

    #[tokio::test]
    async fn unconfirmed_setter_is_a_transaction_failure() {
        let server = MockServer::start();
        let mut receipts = healthy_receipts();
        receipts[2] = Value::Null;
        let node = fake_node(&server, "0x61", receipts);
        let deployer = local_deployer(&server);

        let err = deploy_for(&deployer, "bsctestnet").await.unwrap_err();

        assert!(matches!(
            err,
            DeployError::Transaction {
                contract: ContractKind::FlowCall,
                method: "setTokenReceiver",
                ..
            }
        ));
        assert!(err.to_string().contains("not confirmed"), "{err}");
        node.set_flow_call_address.assert_calls(0);
    }

    #[tokio::test]
    async fn reverted_setter_is_a_transaction_failure() {
        let server = MockServer::start();
        let mut receipts = healthy_receipts();
        receipts[2] = mined(3, "0x0");
        let node = fake_node(&server, "0x61", receipts);
        let deployer = local_deployer(&server);

        let err = deploy_for(&deployer, "bsctestnet").await.unwrap_err();

        assert!(matches!(
            err,
            DeployError::Transaction {
                contract: ContractKind::FlowCall,
                method: "setTokenReceiver",
                ..
            }
        ));
        node.set_flow_call_address.assert_calls(0);
    }

    #[tokio::test]
    async fn http_error_status_is_an_rpc_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST);
            then.status(500).body("upstream unavailable");
        });
        let deployer = local_deployer(&server);

        let err = deployer.deploy(ContractKind::FlowCall).await.unwrap_err();

        mock.assert_calls(1);
        let DeployError::Rpc(msg) = &err else {
            panic!("expected an RPC error, got {err:?}");
        };
        assert!(msg.contains("eth_chainId"));
        assert!(msg.contains("500"));
        assert!(msg.contains("upstream unavailable"));
    }

    fn receipt(json: Value) -> RawReceipt {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn parse_quantity_cases() {
        assert_eq!(parse_quantity("0x0"), Some(0));
        assert_eq!(parse_quantity("0x1b4"), Some(436));
        assert_eq!(parse_quantity("0x"), None);
        assert_eq!(parse_quantity("12"), None);
    }

    #[test]
    fn rejects_invalid_rpc_url() {
        let result = JsonRpcDeployer::new(settings("not a url"), artifacts());
        assert!(matches!(result, Err(DeployError::Rpc(_))));
        assert!(JsonRpcDeployer::new(settings("http://127.0.0.1:8545"), artifacts()).is_ok());
    }

    #[tokio::test]
    async fn deployed_is_empty_before_any_deploy() {
        let deployer = JsonRpcDeployer::new(settings("http://127.0.0.1:8545"), artifacts()).unwrap();
        let err = deployer.deployed(ContractKind::FlowCall).await.unwrap_err();
        assert!(matches!(err, DeployError::NotDeployed(ContractKind::FlowCall)));
    }

    #[test]
    fn request_body_shape() {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: 7,
            method: "eth_chainId",
            params: json!([]),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({ "jsonrpc": "2.0", "id": 7, "method": "eth_chainId", "params": [] })
        );
    }

    #[test]
    fn error_response_becomes_rpc_error() {
        let resp: RpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0", "id": 1,
            "error": { "code": -32000, "message": "insufficient funds" }
        }))
        .unwrap();
        let err = unwrap_response("eth_sendTransaction", resp).unwrap_err();
        assert!(err.to_string().contains("insufficient funds"));
        assert!(err.to_string().contains("-32000"));
    }

    #[test]
    fn null_result_is_passed_through() {
        let resp: RpcResponse =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 1, "result": null })).unwrap();
        assert!(unwrap_response("eth_getTransactionReceipt", resp).unwrap().is_null());
    }

    #[test]
    fn transaction_payloads() {
        let from = Address::new([0xaa; 20]);
        let to = Address::new([0xbb; 20]);

        let tx = deploy_tx(from, "0x6080");
        assert_eq!(tx["from"], from.to_string());
        assert_eq!(tx["data"], "0x6080");
        assert!(tx.get("to").is_none());

        let call = WiringCall::SetFlowCallAddress(from);
        let tx = call_tx(from, to, &call);
        assert_eq!(tx["to"], to.to_string());
        let data = tx["data"].as_str().unwrap();
        assert_eq!(data.len(), 2 + 72);
        assert!(data.ends_with(&hex::encode(from.as_bytes())));
    }

    #[test]
    fn creation_receipt_yields_address() {
        let ok = receipt(json!({
            "transactionHash": "0x01",
            "status": "0x1",
            "contractAddress": "0x00000000000000000000000000000000000000c1",
            "blockNumber": "0x10",
            "gasUsed": "0x5208"
        }));
        assert_eq!(
            created_address(&ok).unwrap().to_string(),
            "0x00000000000000000000000000000000000000c1"
        );
        let tx = ok.to_receipt();
        assert_eq!(tx.block_number, Some(16));
        assert_eq!(tx.gas_used, Some(21_000));
    }

    #[test]
    fn reverted_or_addressless_creation_fails() {
        let reverted = receipt(json!({
            "transactionHash": "0x02",
            "status": "0x0",
            "contractAddress": "0x00000000000000000000000000000000000000c1"
        }));
        assert!(created_address(&reverted).unwrap_err().contains("reverted"));

        let missing = receipt(json!({ "transactionHash": "0x03", "status": "0x1" }));
        assert!(created_address(&missing).unwrap_err().contains("no contract address"));

        let zero = receipt(json!({
            "transactionHash": "0x05",
            "status": "0x1",
            "contractAddress": "0x0000000000000000000000000000000000000000"
        }));
        assert!(created_address(&zero).unwrap_err().contains("zero contract address"));
    }

    #[test]
    fn receipt_without_status_counts_as_success() {
        let legacy = receipt(json!({ "transactionHash": "0x04" }));
        assert!(legacy.succeeded());
    }
}
