use ethers::contract::abigen;

abigen!(
    EntryPointAPI,
    r#"[
        function getNonce(address sender, uint192 key) external view returns (uint256 nonce)
    ]"#
);

abigen!(
    KernelAPI,
    r#"[
        function initialize(bytes21 rootValidator, address hook, bytes validatorData, bytes hookData, bytes[] initConfig) external
        function execute(bytes32 execMode, bytes executionCalldata) external payable
    ]"#
);

abigen!(
    KernelFactoryAPI,
    r#"[
        function createAccount(bytes data, bytes32 salt) external payable returns (address)
        function getAddress(bytes data, bytes32 salt) external view returns (address)
    ]"#
);

abigen!(
    ERC20,
    r#"[
        function approve(address spender, uint256 amount) external returns (bool)
    ]"#
);
