pub mod Document;
