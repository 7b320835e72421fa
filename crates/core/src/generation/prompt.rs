/// Token contract shown to the model as the house style to follow.
pub const EXAMPLE_CONTRACT: &str = r#"pragma solidity ^0.8.20;

import "@openzeppelin/contracts/token/ERC20/ERC20.sol";
import "@openzeppelin/contracts/access/Ownable.sol";

contract MyToken is ERC20, Ownable {
    constructor()
        ERC20("MyToken", "MTK")
        Ownable(msg.sender)
    {
    }

    function mint(address to, uint256 amount) public onlyOwner {
        _mint(to, amount);
    }
}"#;

/// Build the contract-drafting prompt for a description.
///
/// The description is interpolated verbatim, with no escaping. Text that
/// contains fences or instructions ends up in the prompt unchanged.
pub fn build_prompt(description: &str) -> String {
    format!(
        "\nYou are a blockchain developer. You have following simple token contract example.\n\
         ```solidity\n{EXAMPLE_CONTRACT}\n```\n\n\
         Create a Solidity smart contract with the following description: \n\
         {description}\n"
    )
}
