pub type Response = cosmwasm_std::Response;
