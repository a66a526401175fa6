pub const APP_NAME: &str = "synceval";

/// Instrumentation query for the operating-system class, projected to the
/// fields the validations read and serialized as JSON on stdout.
pub const OS_QUERY_SCRIPT: &str = "Get-CimInstance -ClassName Win32_OperatingSystem | Select-Object -Property Version, OperatingSystemSKU | ConvertTo-Json -Compress";

/// Record field carrying the operating-system version string.
pub const OS_VERSION_FIELD: &str = "Version";

/// Record field carrying the numeric operating-system edition (SKU) code.
pub const OS_SKU_FIELD: &str = "OperatingSystemSKU";
