//! Operation input/output records
//!
//! One module per service operation. Inputs and outputs are plain records:
//! the transport that carries them and the marshaller that consumes their
//! field metadata live outside this crate.

pub mod account_configuration;
pub mod delete_certificate;
pub mod describe_certificate;
pub mod export_certificate;
pub mod get_certificate;
pub mod import_certificate;
pub mod list_certificates;
pub mod renew_certificate;
pub mod request_certificate;
pub mod resend_validation_email;
pub mod tagging;
pub mod update_certificate_options;

pub use account_configuration::{
    GetAccountConfigurationOutput, GetAccountConfigurationOutputBuilder,
    PutAccountConfigurationInput, PutAccountConfigurationInputBuilder,
};
pub use delete_certificate::{
    DeleteCertificateInput, DeleteCertificateInputBuilder, DeleteCertificateOutput,
    DeleteCertificateOutputBuilder,
};
pub use describe_certificate::{
    DescribeCertificateInput, DescribeCertificateInputBuilder, DescribeCertificateOutput,
    DescribeCertificateOutputBuilder,
};
pub use export_certificate::{
    ExportCertificateInput, ExportCertificateInputBuilder, ExportCertificateOutput,
    ExportCertificateOutputBuilder,
};
pub use get_certificate::{
    GetCertificateInput, GetCertificateInputBuilder, GetCertificateOutput,
    GetCertificateOutputBuilder,
};
pub use import_certificate::{
    ImportCertificateInput, ImportCertificateInputBuilder, ImportCertificateOutput,
    ImportCertificateOutputBuilder,
};
pub use list_certificates::{
    ListCertificatesInput, ListCertificatesInputBuilder, ListCertificatesOutput,
    ListCertificatesOutputBuilder,
};
pub use renew_certificate::{
    RenewCertificateInput, RenewCertificateInputBuilder, RenewCertificateOutput,
    RenewCertificateOutputBuilder,
};
pub use request_certificate::{
    RequestCertificateInput, RequestCertificateInputBuilder, RequestCertificateOutput,
    RequestCertificateOutputBuilder,
};
pub use resend_validation_email::{
    ResendValidationEmailInput, ResendValidationEmailInputBuilder, ResendValidationEmailOutput,
    ResendValidationEmailOutputBuilder,
};
pub use tagging::{
    AddTagsToCertificateInput, AddTagsToCertificateInputBuilder, ListTagsForCertificateInput,
    ListTagsForCertificateInputBuilder, ListTagsForCertificateOutput,
    ListTagsForCertificateOutputBuilder, RemoveTagsFromCertificateInput,
    RemoveTagsFromCertificateInputBuilder,
};
pub use update_certificate_options::{
    UpdateCertificateOptionsInput, UpdateCertificateOptionsInputBuilder,
    UpdateCertificateOptionsOutput, UpdateCertificateOptionsOutputBuilder,
};
