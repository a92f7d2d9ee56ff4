//! Function definitions advertised to the agent's think provider.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A callable function exposed to the language model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema describing the arguments.
    pub parameters: Value,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// The full function catalog, in the order it is sent to the agent.
pub fn function_definitions() -> Vec<FunctionDefinition> {
    vec![
        FunctionDefinition::new(
            "find_customer",
            "Look up a customer's account information. Use context clues to determine what type of identifier the user is providing:
            - Customer ID format: CUST#### (e.g., CUST0001)
            - Phone number format: +1########## (e.g., +15551234567)
            - Email format: user@domain.com",
            json!({
                "type": "object",
                "properties": {
                    "by": {
                        "type": "string",
                        "enum": ["customer_id", "phone", "email"],
                        "description": "The type of identifier being used to look up the customer"
                    },
                    "value": {
                        "type": "string",
                        "description": "The actual identifier value to search for"
                    }
                },
                "required": ["by", "value"]
            }),
        ),
        FunctionDefinition::new(
            "get_appointments",
            "Retrieve all appointments for a customer. Use this function when:
            - A customer asks about their upcoming appointments
            - A customer wants to know their appointment schedule
            - A customer asks 'When is my next appointment?'",
            json!({
                "type": "object",
                "properties": {
                    "customer_id": {
                        "type": "string",
                        "description": "Customer's ID in format CUST#### (e.g., CUST0001)"
                    }
                },
                "required": ["customer_id"]
            }),
        ),
        FunctionDefinition::new(
            "get_orders",
            "Retrieve order history for a customer. Use this function when:
            - A customer asks about their orders
            - A customer wants to check order status
            - A customer asks questions like 'Where is my order?' or 'What did I order?'",
            json!({
                "type": "object",
                "properties": {
                    "customer_id": {
                        "type": "string",
                        "description": "Customer's ID in format CUST#### (e.g., CUST0001)"
                    }
                },
                "required": ["customer_id"]
            }),
        ),
        FunctionDefinition::new(
            "create_appointment",
            "Schedule a new appointment for a customer. Use this function when:
            - A customer wants to book a new appointment
            - A customer asks to schedule a service
            Before scheduling, always confirm the date and time with check_availability.",
            json!({
                "type": "object",
                "properties": {
                    "customer_id": {
                        "type": "string",
                        "description": "Customer's ID in format CUST#### (e.g., CUST0001)"
                    },
                    "date": {
                        "type": "string",
                        "description": "Appointment date and time in ISO format (YYYY-MM-DDTHH:MM:SS)"
                    },
                    "service": {
                        "type": "string",
                        "description": "Type of service requested",
                        "enum": ["Consultation", "Follow-up", "Review", "Planning"]
                    }
                },
                "required": ["customer_id", "date", "service"]
            }),
        ),
        FunctionDefinition::new(
            "check_availability",
            "Check available appointment slots within a date range. Use this function when:
            - A customer wants to know available appointment times
            - Before scheduling a new appointment",
            json!({
                "type": "object",
                "properties": {
                    "start_date": {
                        "type": "string",
                        "description": "Start date in ISO format (YYYY-MM-DDTHH:MM:SS)"
                    },
                    "end_date": {
                        "type": "string",
                        "description": "End date in ISO format (YYYY-MM-DDTHH:MM:SS). Optional, defaults to 7 days after start_date"
                    }
                },
                "required": ["start_date"]
            }),
        ),
        FunctionDefinition::new(
            "agent_filler",
            "Use this function to provide natural conversational filler before looking up information.
            ALWAYS call this function first with message_type='lookup' when you're about to look up customer information.
            After calling this function, you MUST immediately follow up with the appropriate lookup function.",
            json!({
                "type": "object",
                "properties": {
                    "message_type": {
                        "type": "string",
                        "description": "Type of filler message to use. Use 'lookup' when about to search for information.",
                        "enum": ["lookup", "general"]
                    }
                },
                "required": ["message_type"]
            }),
        ),
        FunctionDefinition::new(
            "end_call",
            "End the conversation and close the connection. Call this function when:
            - User says goodbye, thank you, etc.
            - User indicates they're done
            - User wants to end the conversation",
            json!({
                "type": "object",
                "properties": {
                    "farewell_type": {
                        "type": "string",
                        "description": "Type of farewell to use in response",
                        "enum": ["thanks", "general", "help"]
                    }
                },
                "required": ["farewell_type"]
            }),
        ),
    ]
}
