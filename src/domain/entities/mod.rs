pub mod case;
pub mod client;
pub mod document;
pub mod jenis_pekerjaan;
pub mod protocol;
pub mod schedule_event;
pub mod session;
pub mod task;
pub mod user;
pub mod workflow_template;

pub use case::{Case, CaseCategory, CaseInput, CaseListQuery, CaseStatus};
pub use client::{Client, ClientInput};
pub use document::{
    CaseDocumentEntry, CaseDocumentUpdate, DocumentRequirementItem, DocumentRequirementTemplate,
    DocumentRequirementTemplateInput, DocumentStatus, DocumentUpload,
};
pub use jenis_pekerjaan::{JenisPekerjaan, JenisPekerjaanInput};
pub use protocol::{KlapperEntry, KlapperQuery, ProtocolEntry, ProtocolQuery, ProtocolStatus};
pub use schedule_event::{ScheduleEvent, ScheduleEventInput, ScheduleEventQuery};
pub use session::Session;
pub use task::{HISTORY_FIELD_CREATED, Task, TaskHistoryEntry, TaskInput, TaskStatus, TaskUpdate};
pub use user::{LoginRequest, LoginResponse, Office, OfficeInput, Role, User, UserInput};
pub use workflow_template::{
    ApplyTemplateRequest, WorkflowStep, WorkflowTemplate, WorkflowTemplateInput,
};
