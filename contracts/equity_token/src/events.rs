use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenRegistered {
    pub campaign_id: u64,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Minted {
    pub campaign_id: u64,
    pub to: Address,
    pub amount: i128,
    pub total_supply: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transferred {
    pub campaign_id: u64,
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn emit_token_registered(env: &Env, campaign_id: u64, name: String, symbol: String) {
    let topics = (symbol_short!("tok_reg"), campaign_id);
    env.events().publish(
        topics,
        TokenRegistered {
            campaign_id,
            name,
            symbol,
        },
    );
}

pub fn emit_minted(env: &Env, campaign_id: u64, to: Address, amount: i128, total_supply: i128) {
    let topics = (symbol_short!("mint"), campaign_id);
    env.events().publish(
        topics,
        Minted {
            campaign_id,
            to,
            amount,
            total_supply,
        },
    );
}

pub fn emit_transferred(env: &Env, campaign_id: u64, from: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("transfer"), campaign_id);
    env.events().publish(
        topics,
        Transferred {
            campaign_id,
            from,
            to,
            amount,
        },
    );
}
