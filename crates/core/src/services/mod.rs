pub mod access_service;
pub mod checkout_service;
pub mod payu_service;
pub mod pricing_service;
pub mod purchase_service;
pub mod transaction_service;
