// Copyright (C) 2026 The dialparse authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::EnumIter;

/// Categorizes numbers based on their primary use. A record carries a
/// validation pattern for each type it has data on; the classifier probes
/// them in this order.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// Numbers assigned to wireless devices.
    Mobile,
    /// **Toll-free numbers.**
    /// Calls are free for the caller, with the cost paid by the recipient;
    /// "800" or "888" numbers in the US, "800" in Russia.
    TollFree,
    /// **Premium-rate numbers.**
    /// Charged above normal call rates, often used for paid services.
    PremiumRate,
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// A number associated with a person rather than a location or device,
    /// routed to wherever its owner configured.
    PersonalNumber,
    /// Numbers of services that carry calls over the internet.
    VoIP,
    /// Numbers for sending messages to paging devices.
    Pager,
    /// **Universal Access Numbers.**
    /// A single number a company routes to different offices or departments.
    UAN,
    /// Numbers used to directly access a voicemail service.
    VoiceMail,
}

// The outcome of the length check is split into an Ok and an Err half so it
// rides an ordinary Result.

/// The ways a national significant number's digit count can be acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLengthType {
    /// The length matches a complete, dialable number of the country.
    IsPossible,
    /// The length only matches numbers dialable within a local area (e.g.
    /// without the area code).
    IsPossibleLocalOnly,
}
