//! Wallet connection through the injected `window.ethereum` object.
//!
//! Provides MetaMask (EIP-1193) connectivity through direct JavaScript
//! interop via the Reflect API.

use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;
use walletbar_core::wallet::{parse_chain_id, raw_network_name, register_listeners};
use walletbar_core::{
    AccountAddress, ProviderEvents, RawNetwork, Subscription, WalletError, WalletProvider,
};

use crate::utils::dom;

const ACCOUNTS_CHANGED: &str = "accountsChanged";
const CHAIN_CHANGED: &str = "chainChanged";

/// The wallet object injected by MetaMask or a compatible extension.
pub struct InjectedWallet {
    ethereum: Object,
}

impl InjectedWallet {
    /// Look up `window.ethereum`.
    pub fn detect() -> Result<Self, WalletError> {
        let window = dom::window().ok_or(WalletError::NoWindow)?;
        Reflect::get(&window, &"ethereum".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.dyn_into::<Object>().ok())
            .map(|ethereum| Self { ethereum })
            .ok_or(WalletError::NotInstalled)
    }

    fn function(&self, name: &str) -> Result<Function, WalletError> {
        Reflect::get(&self.ethereum, &name.into())
            .map_err(|_| WalletError::RequestCreationFailed)?
            .dyn_into::<Function>()
            .map_err(|_| WalletError::RequestCreationFailed)
    }

    /// Call `ethereum.request({ method })`.
    async fn request(&self, method: &str) -> Result<JsValue, WalletError> {
        let args = Object::new();
        Reflect::set(&args, &"method".into(), &method.into())
            .map_err(|_| WalletError::RequestCreationFailed)?;

        let promise: Promise = self
            .function("request")?
            .call1(&self.ethereum, &args)
            .map_err(|_| WalletError::RequestCreationFailed)?
            .into();

        JsFuture::from(promise)
            .await
            .map_err(|e| WalletError::RequestRejected(describe(&e)))
    }
}

/// Best-effort message for a rejected provider request.
fn describe(error: &JsValue) -> String {
    Reflect::get(error, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}

fn remove_listener(ethereum: &Object, event: &str, listener: &Closure<dyn Fn(JsValue)>) {
    let removed = Reflect::get(ethereum, &"removeListener".into())
        .and_then(|f| f.dyn_into::<Function>())
        .and_then(|remove| remove.call2(ethereum, &JsValue::from_str(event), listener.as_ref()));
    if let Err(e) = removed {
        tracing::warn!(event, error = %describe(&e), "failed to remove wallet listener");
    }
}

fn decode_accounts(value: JsValue) -> Result<Vec<AccountAddress>, WalletError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| WalletError::InvalidResponse(e.to_string()))
}

#[async_trait(?Send)]
impl WalletProvider for InjectedWallet {
    async fn request_accounts(&self) -> Result<Vec<AccountAddress>, WalletError> {
        let result = self.request("eth_requestAccounts").await?;
        decode_accounts(result)
    }

    async fn network(&self) -> Result<RawNetwork, WalletError> {
        let result = self.request("eth_chainId").await?;
        let chain_id = result
            .as_string()
            .as_deref()
            .and_then(parse_chain_id)
            .ok_or_else(|| WalletError::InvalidResponse(format!("eth_chainId: {:?}", result)))?;
        Ok(RawNetwork::new(chain_id, raw_network_name(chain_id)))
    }

    fn subscribe(&self, events: ProviderEvents) -> Result<Subscription, WalletError> {
        let ProviderEvents {
            accounts_changed,
            network_changed,
        } = events;

        let on_accounts = Closure::wrap(Box::new(move |accounts: JsValue| {
            match decode_accounts(accounts) {
                Ok(addresses) => accounts_changed(addresses),
                Err(error) => tracing::warn!(%error, "ignoring malformed accountsChanged payload"),
            }
        }) as Box<dyn Fn(JsValue)>);

        let on_chain = Closure::wrap(Box::new(move |_chain_id: JsValue| {
            network_changed();
        }) as Box<dyn Fn(JsValue)>);

        let on = self.function("on")?;
        let ethereum = self.ethereum.clone();
        let listeners = register_listeners(
            vec![(ACCOUNTS_CHANGED, on_accounts), (CHAIN_CHANGED, on_chain)],
            |(event, listener)| {
                on.call2(&ethereum, &JsValue::from_str(event), listener.as_ref())
                    .map(drop)
                    .map_err(|e| WalletError::SubscriptionFailed(describe(&e)))
            },
            |(event, listener)| remove_listener(&ethereum, event, listener),
        )?;

        // The closures live until the listeners are removed.
        Ok(Subscription::new(move || {
            for (event, listener) in &listeners {
                remove_listener(&ethereum, event, listener);
            }
        }))
    }
}
