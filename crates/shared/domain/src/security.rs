use crate::wire::wire_enum;

wire_enum! {
    /// Reason attached to a failed security operation.
    pub enum SecurityErrorCode {
        DefaultSecurityError = 0,
        BadCredentials = 1,
        PermissionDenied = 2,
        UserDoesntExist = 3,
        ConnectionError = 4,
        UserExists = 5,
        GrantInvalid = 6,
        BadAuthorizations = 7,
        #[strum(to_string = "INVALID_INSTANCEID")]
        InvalidInstanceId = 8,
        TableDoesntExist = 9,
    }
}
