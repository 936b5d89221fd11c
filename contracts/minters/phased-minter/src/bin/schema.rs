use cosmwasm_schema::write_api;

use minter_types::{InstantiateMsg, MigrateMsg, QueryMsg};

use phased_minter::msg::ExecuteMsg;

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
        migrate: MigrateMsg,
    }
}
