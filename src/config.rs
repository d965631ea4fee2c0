/// Configuration constants for IBM Cloud APIs
pub mod api {
    /// Public IAM endpoint (token exchange and IAM Identity API)
    pub const IAM_URL: &str = "https://iam.cloud.ibm.com";

    /// Token exchange path on the IAM endpoint
    pub const TOKEN_PATH: &str = "/identity/token";

    /// Grant type for exchanging an API key for a bearer token
    pub const APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

    /// Code Engine v2 endpoint template (`{region}` is substituted)
    pub const CODE_ENGINE_URL: &str = "https://api.{region}.codeengine.cloud.ibm.com/v2";

    /// VPC v1 endpoint template (`{region}` is substituted)
    pub const VPC_URL: &str = "https://{region}.iaas.cloud.ibm.com/v1";

    /// Dated API version required on every VPC request
    pub const VPC_API_VERSION: &str = "2024-04-30";

    /// VPC infrastructure generation
    pub const VPC_GENERATION: &str = "2";

    /// Default page size for list requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Largest page size accepted by all three services
    pub const MAX_PAGE_SIZE: u32 = 100;

    /// Refresh the bearer token this many seconds before it expires
    pub const TOKEN_EXPIRY_BUFFER_SECS: i64 = 60;
}

/// Configuration constants for credentials
pub mod credentials {
    /// API key environment variable (required)
    pub const API_KEY_ENV_VAR: &str = "IBMCLOUD_API_KEY";

    /// Account ID environment variable (optional, IAM commands)
    pub const ACCOUNT_ID_ENV_VAR: &str = "IBMCLOUD_ACCOUNT_ID";

    /// Region environment variables for Code Engine (checked in order)
    pub const CODE_ENGINE_REGION_ENV_VARS: &[&str] = &["CODE_ENGINE_REGION", "IBMCLOUD_REGION"];

    /// Region environment variables for VPC (checked in order)
    pub const VPC_REGION_ENV_VARS: &[&str] = &["IBMCLOUD_REGION"];

    /// IAM base URL override
    pub const IAM_URL_ENV_VAR: &str = "IBMCLOUD_IAM_URL";

    /// Service base URL override
    pub const SERVICE_URL_ENV_VAR: &str = "IBMCLOUD_SERVICE_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
