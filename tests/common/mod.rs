use std::{
    net::SocketAddr,
    process::Output,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use serde_json::{json, Value};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    process::Command,
};

// anvil account #0
pub const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const WALLET_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const TBA_ADDRESS: &str = "0xF33c26a854cB80d0D75F683dE17b430FDa6aD453";

pub const CLAIM_BODY: &str = r#"{
    "index": 3,
    "amount": "1000000000000000000",
    "proof": [
        "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"
    ]
}"#;

/// Serves JSON-RPC on POST and the claim API on GET from the same port.
pub struct MockNode {
    pub addr: SocketAddr,
    pub rpc_hits: Arc<AtomicUsize>,
    pub claim_hits: Arc<AtomicUsize>,
}

#[derive(Clone)]
pub struct MockResponses {
    pub chain_id: &'static str,
    /// When set, `eth_chainId` answers with this JSON-RPC error message
    pub chain_id_error: Option<&'static str>,
    pub claim_status: &'static str,
    pub claim_body: &'static str,
}

impl Default for MockResponses {
    fn default() -> Self {
        Self {
            chain_id: "0xa4b1",
            chain_id_error: None,
            claim_status: "200 OK",
            claim_body: CLAIM_BODY,
        }
    }
}

impl MockNode {
    pub async fn start(responses: MockResponses) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let rpc_hits = Arc::new(AtomicUsize::new(0));
        let claim_hits = Arc::new(AtomicUsize::new(0));

        let (rpc, claim) = (rpc_hits.clone(), claim_hits.clone());
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let (responses, rpc, claim) = (responses.clone(), rpc.clone(), claim.clone());
                tokio::spawn(async move {
                    handle(stream, responses, rpc, claim).await;
                });
            }
        });

        Self {
            addr,
            rpc_hits,
            claim_hits,
        }
    }

    pub fn rpc_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn claim_url(&self) -> String {
        format!("http://{}/api/eigenlayer-claim-data", self.addr)
    }

    pub fn rpc_hits(&self) -> usize {
        self.rpc_hits.load(Ordering::SeqCst)
    }

    pub fn claim_hits(&self) -> usize {
        self.claim_hits.load(Ordering::SeqCst)
    }
}

async fn read_request(stream: &mut TcpStream) -> Option<(String, Vec<u8>)> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Some((head, body))
}

fn rpc_result(request: &Value, responses: &MockResponses) -> Value {
    let id = request["id"].clone();
    match request["method"].as_str() {
        Some("eth_chainId") if responses.chain_id_error.is_some() => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32000, "message": responses.chain_id_error }
        }),
        Some("eth_chainId") => json!({ "jsonrpc": "2.0", "id": id, "result": responses.chain_id }),
        Some("eth_getCode") => json!({ "jsonrpc": "2.0", "id": id, "result": "0x" }),
        _ => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32601, "message": "method not found" }
        }),
    }
}

async fn handle(
    mut stream: TcpStream,
    responses: MockResponses,
    rpc_hits: Arc<AtomicUsize>,
    claim_hits: Arc<AtomicUsize>,
) {
    let Some((head, body)) = read_request(&mut stream).await else {
        return;
    };

    let (status, payload) = if head.starts_with("POST") {
        rpc_hits.fetch_add(1, Ordering::SeqCst);
        let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        ("200 OK", rpc_result(&request, &responses).to_string())
    } else {
        claim_hits.fetch_add(1, Ordering::SeqCst);
        (responses.claim_status, responses.claim_body.to_string())
    };

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
        payload.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Runs the binary with only the given variables from the claim env set.
pub async fn run_claimer(vars: &[(&str, String)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_tba-claimer"));
    // keep a developer's .env out of the run
    let workdir = std::env::temp_dir().join("tba-claimer-tests");
    std::fs::create_dir_all(&workdir).unwrap();
    // an empty .env here stops the lookup from reaching parent directories
    std::fs::write(workdir.join(".env"), "").unwrap();
    command.current_dir(workdir);

    for name in [
        "RPC_URL",
        "PRIVATE_KEY",
        "CLAIM_API_URL",
        "TOKEN_CONTRACT",
        "TOKEN_ID",
        "RUST_LOG",
    ] {
        command.env_remove(name);
    }
    for (name, value) in vars {
        command.env(name, value);
    }

    command.output().await.unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
