use super::{Category, Question};

const fn q(
    id: u16,
    category: Category,
    prompt: &'static str,
    explanation: &'static str,
) -> Question {
    Question {
        id,
        category,
        prompt,
        explanation: Some(explanation),
    }
}

/// The full questionnaire in presentation order.
pub static QUESTIONS: [Question; 86] = [
    // Core Values & Ethics (1-10)
    q(1, Category::CoreValuesEthics, "Honesty and transparency in all aspects of our relationship", "Including financial decisions, past relationships, and daily interactions"),
    q(2, Category::CoreValuesEthics, "Commitment to personal integrity and ethical behavior", "Acting according to moral principles even when it's difficult"),
    q(3, Category::CoreValuesEthics, "Loyalty and faithfulness to each other", "Emotional and physical fidelity, prioritizing the relationship"),
    q(4, Category::CoreValuesEthics, "Mutual respect for each other's opinions and decisions", "Valuing different perspectives and treating each other with dignity"),
    q(5, Category::CoreValuesEthics, "Shared approach to helping others and community service", "Volunteering, charitable giving, and social responsibility"),
    q(6, Category::CoreValuesEthics, "Similar views on justice, fairness, and equality", "How we treat others and expect to be treated"),
    q(7, Category::CoreValuesEthics, "Agreement on work-life balance priorities", "Balancing career ambitions with personal and family time"),
    q(8, Category::CoreValuesEthics, "Shared environmental and sustainability values", "Approach to consumption, conservation, and environmental responsibility"),
    q(9, Category::CoreValuesEthics, "Similar political and social justice perspectives", "Views on government, social issues, and civic engagement"),
    q(10, Category::CoreValuesEthics, "Agreement on material possessions and lifestyle choices", "Attitudes toward wealth, luxury, and simple living"),
    // Religion (11-15)
    q(11, Category::Religion, "Shared religious beliefs and practices", "Same faith tradition, church attendance, and religious observance"),
    q(12, Category::Religion, "Agreement on the role of religion in daily life", "Prayer, religious study, and faith-based decision making"),
    q(13, Category::Religion, "Religious ceremonies and holiday observances", "How we celebrate religious holidays and participate in traditions"),
    q(14, Category::Religion, "Religious community involvement and leadership", "Active participation in religious organizations and serving others"),
    q(15, Category::Religion, "Interfaith relationships and acceptance of religious differences", "Respect for different beliefs and handling religious diversity"),
    // Spirituality (16-20)
    q(16, Category::Spirituality, "Personal spiritual growth and development", "Individual spiritual practices and seeking meaning"),
    q(17, Category::Spirituality, "Meditation, prayer, or other spiritual practices", "Regular spiritual disciplines and contemplative practices"),
    q(18, Category::Spirituality, "Belief in purpose and meaning beyond material success", "Values that transcend wealth and worldly achievements"),
    q(19, Category::Spirituality, "Openness to different spiritual perspectives and practices", "Exploring various spiritual traditions and philosophies"),
    q(20, Category::Spirituality, "Integration of spiritual values into everyday decisions", "Letting spiritual principles guide major life choices"),
    // Relationship Model & Boundaries (21-25)
    q(21, Category::RelationshipModelBoundaries, "Expectations of exclusivity and monogamy", "Clear boundaries around romantic and sexual relationships with others"),
    q(22, Category::RelationshipModelBoundaries, "Boundaries with friends of the opposite sex", "Appropriate friendships and social interactions outside the relationship"),
    q(23, Category::RelationshipModelBoundaries, "Social media and online relationship boundaries", "Appropriate online behavior and digital communication with others"),
    q(24, Category::RelationshipModelBoundaries, "Individual time and space within the relationship", "Personal hobbies, alone time, and maintaining individual identity"),
    q(25, Category::RelationshipModelBoundaries, "Sharing personal information and maintaining privacy", "What to keep private vs. what to share with each other"),
    // Life Vision & Home (26-30)
    q(26, Category::LifeVisionHome, "Where we want to live (city, suburb, rural, etc.)", "Geographic preferences and lifestyle setting"),
    q(27, Category::LifeVisionHome, "Type of home and living arrangements we prefer", "House size, style, renting vs. owning, and home features"),
    q(28, Category::LifeVisionHome, "Long-term life goals and dreams we want to pursue together", "Major life aspirations and shared vision for the future"),
    q(29, Category::LifeVisionHome, "Travel and adventure priorities", "How much and what type of travel we want to do together"),
    q(30, Category::LifeVisionHome, "Retirement planning and later life vision", "How we want to spend our golden years together"),
    // Children & Parenting (31-40)
    q(31, Category::ChildrenParenting, "Whether or not to have children", "Fundamental agreement on becoming parents"),
    q(32, Category::ChildrenParenting, "How many children we want", "Desired family size and spacing between children"),
    q(33, Category::ChildrenParenting, "Timeline for having children", "When to start trying and family planning considerations"),
    q(34, Category::ChildrenParenting, "Parenting philosophy and discipline approaches", "How to raise, guide, and correct children's behavior"),
    q(35, Category::ChildrenParenting, "Educational choices for our children", "Public school, private school, homeschooling, or other options"),
    q(36, Category::ChildrenParenting, "Religious and moral education of our children", "What values and beliefs to teach our children"),
    q(37, Category::ChildrenParenting, "Childcare arrangements and work-family balance", "Who stays home, daycare options, and managing career with kids"),
    q(38, Category::ChildrenParenting, "Special needs support and advocacy", "How we would handle children with disabilities or special requirements"),
    q(39, Category::ChildrenParenting, "Adoption, fostering, or alternative paths to parenthood", "Openness to different ways of building our family"),
    q(40, Category::ChildrenParenting, "Extended family involvement in child-rearing", "Role of grandparents and relatives in our children's lives"),
    // Finances (41-50)
    q(41, Category::Finances, "How we manage money and make financial decisions together", "Joint accounts, individual accounts, and decision-making process"),
    q(42, Category::Finances, "Budgeting and spending priorities", "How we allocate money for necessities, wants, and savings"),
    q(43, Category::Finances, "Saving and investment strategies", "Retirement planning, emergency funds, and investment approaches"),
    q(44, Category::Finances, "Debt management and financial obligations", "How we handle existing debt and avoid future financial problems"),
    q(45, Category::Finances, "Major purchase decisions and financial goals", "Buying cars, homes, and other significant financial commitments"),
    q(46, Category::Finances, "Financial support for family members", "Helping parents, siblings, or other relatives financially"),
    q(47, Category::Finances, "Charitable giving and financial generosity", "How much to give to charity and support causes we care about"),
    q(48, Category::Finances, "Financial transparency and honesty", "Sharing all financial information and being open about money matters"),
    q(49, Category::Finances, "Risk tolerance in investments and financial planning", "Conservative vs. aggressive investment strategies and financial risks"),
    q(50, Category::Finances, "Financial preparation for emergencies and unexpected events", "Insurance, emergency funds, and financial safety nets"),
    // Work & Career (51-60)
    q(51, Category::WorkCareer, "Career ambitions and professional goals", "Individual career paths and supporting each other's professional growth"),
    q(52, Category::WorkCareer, "Work-life balance and time commitments", "How much time to dedicate to work vs. family and personal life"),
    q(53, Category::WorkCareer, "Relocating for career opportunities", "Willingness to move for job advancement or career changes"),
    q(54, Category::WorkCareer, "Supporting each other's career development", "Education, training, and professional networking support"),
    q(55, Category::WorkCareer, "Managing career changes and job transitions", "How we handle unemployment, career switches, or new opportunities"),
    q(56, Category::WorkCareer, "Entrepreneurship and business ventures", "Starting businesses, financial risks, and time investments in ventures"),
    q(57, Category::WorkCareer, "Professional networking and business relationships", "Work social events, professional associations, and business friendships"),
    q(58, Category::WorkCareer, "Continuing education and professional development", "Ongoing learning, degrees, certifications, and skill development"),
    q(59, Category::WorkCareer, "Retirement timeline and career wind-down", "When and how we want to retire from our careers"),
    q(60, Category::WorkCareer, "Balancing two careers and mutual support", "Prioritizing when career conflicts arise and supporting each other"),
    // Household & Roles (61-65)
    q(61, Category::HouseholdRoles, "Division of household chores and responsibilities", "Who does what around the house and how we maintain our home"),
    q(62, Category::HouseholdRoles, "Cooking, meal planning, and food responsibilities", "Who cooks, shops for food, and manages meal preparation"),
    q(63, Category::HouseholdRoles, "Home maintenance, repairs, and improvements", "Who handles home repairs, yard work, and home improvement projects"),
    q(64, Category::HouseholdRoles, "Management of household finances and bills", "Who pays bills, manages accounts, and handles financial administration"),
    q(65, Category::HouseholdRoles, "Traditional vs. egalitarian role expectations", "How we view gender roles and division of responsibilities"),
    // Communication & Conflict (66-70)
    q(66, Category::CommunicationConflict, "How we handle disagreements and resolve conflicts", "Our approach to arguing, finding solutions, and making peace"),
    q(67, Category::CommunicationConflict, "Communication styles and emotional expression", "How we share feelings, discuss problems, and express love"),
    q(68, Category::CommunicationConflict, "Decision-making processes for major choices", "How we make big decisions together and handle disagreements"),
    q(69, Category::CommunicationConflict, "Seeking outside help for relationship issues", "Willingness to go to counseling, therapy, or ask for help"),
    q(70, Category::CommunicationConflict, "Managing stress and supporting each other emotionally", "How we help each other through difficult times and stress"),
    // Love, Intimacy & Sex (71-76)
    q(71, Category::LoveIntimacySex, "Physical affection and intimacy expectations", "Frequency and type of physical affection and sexual intimacy"),
    q(72, Category::LoveIntimacySex, "Sexual compatibility and openness to discuss needs", "Ability to communicate about sex and meet each other's needs"),
    q(73, Category::LoveIntimacySex, "Emotional intimacy and vulnerability with each other", "Sharing deep feelings, fears, and being emotionally open"),
    q(74, Category::LoveIntimacySex, "Romance, dating, and keeping the spark alive", "Ongoing courtship, romantic gestures, and relationship maintenance"),
    q(75, Category::LoveIntimacySex, "Boundaries and comfort levels with physical intimacy", "What we're comfortable with and personal boundaries around intimacy"),
    q(76, Category::LoveIntimacySex, "Addressing changes in physical intimacy over time", "How we handle changes due to age, health, or life circumstances"),
    // Health & Lifestyle (77-81)
    q(77, Category::HealthLifestyle, "Health and fitness priorities and activities", "Exercise routines, diet choices, and maintaining physical health"),
    q(78, Category::HealthLifestyle, "Approach to medical care and health decisions", "Healthcare choices, medical treatments, and health philosophy"),
    q(79, Category::HealthLifestyle, "Mental health awareness and support", "Handling depression, anxiety, therapy, and emotional wellbeing"),
    q(80, Category::HealthLifestyle, "Substance use (alcohol, etc.) and related boundaries", "Drinking habits, drug use, and what we're comfortable with"),
    q(81, Category::HealthLifestyle, "Aging gracefully and supporting each other through health changes", "How we'll care for each other as we age and face health challenges"),
    // Family of Origin & In-Laws (82-85)
    q(82, Category::FamilyOfOriginInLaws, "Relationships with our parents and extended family", "How close we are to family and how much time we spend with them"),
    q(83, Category::FamilyOfOriginInLaws, "Setting boundaries with family members", "Managing family interference and maintaining our independence as a couple"),
    q(84, Category::FamilyOfOriginInLaws, "Holiday traditions and family obligations", "Which family events to attend and how to balance family expectations"),
    q(85, Category::FamilyOfOriginInLaws, "Caring for aging parents and family responsibilities", "Future caregiving responsibilities and supporting our parents as they age"),
    // Growth & Change (86)
    q(86, Category::GrowthChange, "Supporting each other's personal growth and change over time", "Accepting that we both will grow and change throughout our marriage"),
];
