//! One extractor per document format.

mod certificate_of_analysis;
mod order_confirmation;
mod packing_list;
mod proforma_invoice;
mod purchase_order;
mod shipping_document;

pub use certificate_of_analysis::CertificateOfAnalysisExtractor;
pub use order_confirmation::OrderConfirmationExtractor;
pub use packing_list::PackingListAltExtractor;
pub use proforma_invoice::ProformaInvoiceExtractor;
pub use purchase_order::PurchaseOrderExtractor;
pub use shipping_document::PackingListShippingExtractor;
