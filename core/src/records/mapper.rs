//! records/mapper.rs
//!
//! Positional mapping between the value tree and typed records.
//!
//! Layout:
//! - root    `[version, [account, ...]]`
//! - account `[id, index, type, block, wallet]`
//! - wallet  `[derivation_path, chain_code, name, flag_a, flag_b, opaque, xpub]`
//!
//! Every access is checked; the first missing or mistyped position fails the
//! whole mapping. Positions past the layout are ignored.

use log::debug;

use crate::constants::positions::*;
use crate::container::{value_kind, ValueTree};
use crate::records::types::{Account, Found, Root, SchemaError, WalletInfo};

/// A positional sequence plus its path, for error reporting.
struct Seq<'a> {
    items: &'a [ValueTree],
    path: String,
}

impl<'a> Seq<'a> {
    fn new(value: &'a ValueTree, path: String) -> Result<Self, SchemaError> {
        match value {
            ValueTree::Array(items) => Ok(Self { items, path }),
            other => Err(SchemaError { path, expected: "array", found: Found::Kind(value_kind(other)) }),
        }
    }

    fn child_path(&self, pos: usize) -> String {
        format!("{}[{}]", self.path, pos)
    }

    fn get(&self, pos: usize, expected: &'static str) -> Result<&'a ValueTree, SchemaError> {
        self.items.get(pos).ok_or_else(|| SchemaError {
            path: self.child_path(pos),
            expected,
            found: Found::Missing,
        })
    }

    fn mismatch(&self, pos: usize, expected: &'static str, found: &ValueTree) -> SchemaError {
        SchemaError { path: self.child_path(pos), expected, found: Found::Kind(value_kind(found)) }
    }

    fn seq(&self, pos: usize) -> Result<Seq<'a>, SchemaError> {
        let value = self.get(pos, "array")?;
        Seq::new(value, self.child_path(pos))
    }

    fn int(&self, pos: usize) -> Result<i64, SchemaError> {
        match self.get(pos, "integer")? {
            ValueTree::Integer(i) => i64::try_from(*i).map_err(|_| SchemaError {
                path: self.child_path(pos),
                expected: "integer",
                found: Found::OutOfRange,
            }),
            other => Err(self.mismatch(pos, "integer", other)),
        }
    }

    fn text(&self, pos: usize) -> Result<String, SchemaError> {
        match self.get(pos, "text")? {
            ValueTree::Text(s) => Ok(s.clone()),
            other => Err(self.mismatch(pos, "text", other)),
        }
    }

    fn bool(&self, pos: usize) -> Result<bool, SchemaError> {
        match self.get(pos, "bool")? {
            ValueTree::Bool(b) => Ok(*b),
            other => Err(self.mismatch(pos, "bool", other)),
        }
    }

    /// Byte string, or text taken as its UTF-8 bytes.
    fn opaque(&self, pos: usize) -> Result<Vec<u8>, SchemaError> {
        match self.get(pos, "byte string")? {
            ValueTree::Bytes(b) => Ok(b.clone()),
            ValueTree::Text(s) => Ok(s.as_bytes().to_vec()),
            other => Err(self.mismatch(pos, "byte string", other)),
        }
    }
}

fn map_wallet(w: &Seq<'_>) -> Result<WalletInfo, SchemaError> {
    Ok(WalletInfo {
        derivation_path: w.text(WALLET_DERIVATION_PATH)?,
        chain_code: w.text(WALLET_CHAIN_CODE)?,
        name: w.text(WALLET_NAME)?,
        flag_a: w.bool(WALLET_FLAG_A)?,
        flag_b: w.bool(WALLET_FLAG_B)?,
        opaque: w.opaque(WALLET_OPAQUE)?,
        xpub: w.text(WALLET_XPUB)?,
    })
}

fn map_account(a: &Seq<'_>) -> Result<Account, SchemaError> {
    Ok(Account {
        id: a.int(ACCOUNT_ID)?,
        index: a.int(ACCOUNT_INDEX)?,
        kind: a.text(ACCOUNT_TYPE)?,
        block: a.int(ACCOUNT_BLOCK)?,
        wallet: map_wallet(&a.seq(ACCOUNT_WALLET)?)?,
    })
}

/// Map a value tree into a `Root`.
///
/// # Errors
/// `SchemaError` naming the first position that is absent or of the wrong kind.
pub fn map_root(tree: &ValueTree) -> Result<Root, SchemaError> {
    let root = Seq::new(tree, "$".to_string())?;
    let version = root.int(ROOT_VERSION)?;
    let list = root.seq(ROOT_ACCOUNTS)?;

    let accounts = (0..list.items.len())
        .map(|i| map_account(&list.seq(i)?))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("mapped root: version {}, {} accounts", version, accounts.len());
    Ok(Root { version, accounts })
}

impl WalletInfo {
    pub fn to_value(&self) -> ValueTree {
        let mut items = vec![ValueTree::Null; WALLET_LEN];
        items[WALLET_DERIVATION_PATH] = ValueTree::Text(self.derivation_path.clone());
        items[WALLET_CHAIN_CODE] = ValueTree::Text(self.chain_code.clone());
        items[WALLET_NAME] = ValueTree::Text(self.name.clone());
        items[WALLET_FLAG_A] = ValueTree::Bool(self.flag_a);
        items[WALLET_FLAG_B] = ValueTree::Bool(self.flag_b);
        items[WALLET_OPAQUE] = ValueTree::Bytes(self.opaque.clone());
        items[WALLET_XPUB] = ValueTree::Text(self.xpub.clone());
        ValueTree::Array(items)
    }
}

impl Account {
    pub fn to_value(&self) -> ValueTree {
        let mut items = vec![ValueTree::Null; ACCOUNT_LEN];
        items[ACCOUNT_ID] = ValueTree::Integer(self.id.into());
        items[ACCOUNT_INDEX] = ValueTree::Integer(self.index.into());
        items[ACCOUNT_TYPE] = ValueTree::Text(self.kind.clone());
        items[ACCOUNT_BLOCK] = ValueTree::Integer(self.block.into());
        items[ACCOUNT_WALLET] = self.wallet.to_value();
        ValueTree::Array(items)
    }
}

impl Root {
    /// Positional value tree for this root; `map_root(&r.to_value()) == Ok(r)`.
    pub fn to_value(&self) -> ValueTree {
        let mut items = vec![ValueTree::Null; ROOT_LEN];
        items[ROOT_VERSION] = ValueTree::Integer(self.version.into());
        items[ROOT_ACCOUNTS] = ValueTree::Array(self.accounts.iter().map(Account::to_value).collect());
        ValueTree::Array(items)
    }
}
