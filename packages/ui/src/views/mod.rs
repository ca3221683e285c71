mod account;
pub use account::{Hacker, Index, Login, Signup};

mod search;
pub use search::{Search, SearchResults};

mod survey;
pub use survey::{
    NoSuchSurvey, SubmissionReceived, SurveyCreate, SurveyList, SurveySuccess, ViewSurvey,
};
